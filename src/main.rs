use std::env;

use recibos::{config::RecibosConfig, util::RecibosUtil};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = matches!(
        env::var("RECIBOS_LOG_JSON").as_deref(),
        Ok("1") | Ok("true")
    );
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match RecibosConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = ?e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = RecibosUtil::router(&config);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        data_file = %config.data_file.display(),
        "recibos server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
