pub mod flag;
pub mod list;
pub mod pretty;
