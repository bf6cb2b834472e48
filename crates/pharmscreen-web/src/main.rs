mod handlers;
mod router;
mod state;

use clap::Parser;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browser front-end for the PharmScreen descriptor screen.
///
/// Collects the two input files by paste or upload, runs the analyser binary
/// as a subprocess, and renders the resulting table with a pass/fail glyph.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Address to bind the HTTP server on.
    #[arg(long, default_value = "127.0.0.1:8080", value_name = "ADDR")]
    bind: SocketAddr,

    /// Directory the fixed input, output, and log filenames live in.
    #[arg(long, default_value = ".", value_name = "DIR")]
    work_dir: PathBuf,

    /// The analyser binary invoked for each run.
    #[arg(long, default_value = "pharmscreen", value_name = "BIN")]
    analyser_bin: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();
    let app = router::build_router(AppState::new(args.work_dir, args.analyser_bin));

    info!("PharmScreen front-end listening on http://{}", args.bind);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await
}
