use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use friends_server::friends::{FriendService, FriendStore};
use friends_server::stations::StationRegistry;
use friends_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the station catalogue (built-in defaults unless a file is given)
    let stations = match std::env::var("STATIONS_FILE") {
        Ok(path) => StationRegistry::load(&path).expect("Failed to load station catalogue"),
        Err(_) => {
            eprintln!("Warning: STATIONS_FILE not set. Using built-in station catalogue.");
            StationRegistry::with_defaults()
        }
    };
    println!("Loaded {} station names", stations.len().await);

    // Build app state
    let store = FriendStore::new();
    let state = AppState::new(FriendService::new(store), stations);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Friends & Favorite Journeys server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                            - Health check");
    println!("  POST /users/friends                     - Create a friend");
    println!("  GET  /users/friends                     - List friends");
    println!("  POST /users/:username/favoriteJourney   - Set journey or schedule departure");
    println!("  GET  /users/:username/favoriteJourney   - Fetch stored journey");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
