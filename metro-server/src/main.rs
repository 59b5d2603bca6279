use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use metro_server::network;
use metro_server::planner::SearchConfig;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Network file: first argument, or METRO_NETWORK.
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("METRO_NETWORK").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            eprintln!("usage: metro-server <network.json>");
            std::process::exit(2);
        });

    let (graph, affluence) = network::load(&path).unwrap_or_else(|e| {
        eprintln!("failed to load network from {}: {e}", path.display());
        std::process::exit(1);
    });
    tracing::info!(
        nodes = graph.len(),
        affluence_entries = affluence.len(),
        "network loaded"
    );

    let state = AppState::new(graph, affluence, SearchConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("metro route planner listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
