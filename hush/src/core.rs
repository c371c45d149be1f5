pub mod config;
pub mod konst;
pub mod model;
pub mod traced;
