#![allow(dead_code)]

use kube_greeter::routes;
use kube_greeter::server;
use kube_greeter::state::AppState;

pub const TEST_VERSION: &str = "1.0.0";

/// Router wired to a fixed version, for `oneshot()` calls.
pub fn test_app() -> axum::Router {
    test_app_with_version(TEST_VERSION)
}

pub fn test_app_with_version(version: &str) -> axum::Router {
    routes::router(AppState::new(version))
}

/// Binds an ephemeral port on localhost, spawns the server, and returns the base URL.
pub async fn spawn(version: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(version);
    tokio::spawn(async move {
        server::serve(listener, state).await.unwrap();
    });
    format!("http://127.0.0.1:{}", addr.port())
}
