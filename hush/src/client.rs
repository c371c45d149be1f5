use crate::{core::config::Config, error::Run};

pub async fn run() -> Result<(), Run> {
    color_eyre::install()?;
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            return Err(error.into());
        }
    }
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(crate::error::InstallDefaultCryptoProvider)?;

    Ok(crate::runner::start(config).await?)
}
