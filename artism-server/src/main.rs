//! artism-server - Artism platform backend
//!
//! REST API for browsing artists, artworks, art movements, and timeline
//! nodes, plus the AI-chat stub. Zero-config startup: the database is
//! created automatically under the resolved data folder.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use artism_server::{build_router, AppState};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "artism-server", version, about = "Artism platform backend")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "ARTISM_PORT", default_value_t = 8000)]
    port: u16,

    /// Data folder holding the database (overrides ARTISM_DATA_DIR and config file)
    #[arg(long, env = "ARTISM_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting artism-server v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let data_dir = artism_common::config::resolve_data_dir(args.data_dir);
    let db_path = artism_common::config::prepare_data_dir(&data_dir)?;
    info!("Database path: {}", db_path.display());

    let pool = artism_common::db::init_database(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("artism-server listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
