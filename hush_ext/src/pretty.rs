mod join;

pub use join::PrettyJoiner;
