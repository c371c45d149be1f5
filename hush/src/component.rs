pub mod auto_mute;
