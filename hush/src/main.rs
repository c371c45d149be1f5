mod client;
mod component;
mod core;
mod error;
mod gateway;
mod runner;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match client::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error}", crate::core::konst::exit_code::FATAL);
            ExitCode::FAILURE
        }
    }
}
