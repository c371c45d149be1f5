pub mod config;
pub mod runner;

use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to install the default crypto provider")]
pub struct InstallDefaultCryptoProvider(pub Arc<rustls::crypto::CryptoProvider>);

#[derive(Error, Debug)]
#[error("error running the bot starter: {}", .0)]
pub enum Run {
    ColorEyre(#[from] color_eyre::Report),
    Dotenvy(#[from] dotenvy::Error),
    Config(#[from] config::ConfigError),
    InstallDefaultCryptoProvider(#[from] InstallDefaultCryptoProvider),
    StartError(#[from] runner::StartError),
}
