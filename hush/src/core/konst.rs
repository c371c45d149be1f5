pub mod env {
    pub const TOKEN: &str = "DISCORD_TOKEN";
    pub const TARGET_VOICE_CHANNEL_ID: &str = "TARGET_VOICE_CHANNEL_ID";
    pub const AUTO_UNMUTE_ON_LEAVE: &str = "AUTO_UNMUTE_ON_LEAVE";
    pub const EXEMPT_ROLE_IDS: &str = "EXEMPT_ROLE_IDS";
}

pub mod audit_reason {
    pub const MUTE: &str = "Auto-mute: joined target voice channel";
    pub const UNMUTE: &str = "Auto-unmute: left target voice channel";
}

pub mod text {
    pub const NO_EXEMPT_ROLES: &str = "(none)";
}

pub mod exit_code {
    /// Startup was aborted, nothing was connected
    pub const FATAL: &str = "❌";
}
