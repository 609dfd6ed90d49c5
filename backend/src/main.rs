//! Backend entry-point: loads settings, initialises tracing, and serves the
//! booking intake API.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| {
        std::io::Error::other(format!("failed to load server settings: {e}"))
    })?;

    create_server(&settings)?.await
}
