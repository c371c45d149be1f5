use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing `{}` in environment", .0)]
    Missing(&'static str),
    #[error("`{}` is not a valid snowflake: `{}` ({})", .name, .value, .source)]
    InvalidId {
        name: &'static str,
        value: Box<str>,
        source: ParseIntError,
    },
}
