mod greeting;

use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Every path the service answers on. `/{*path}` does not match the bare
/// root, so both entries are needed.
const CATCH_ALL: [&str; 2] = ["/", "/{*path}"];

/// Build the application router. Any method on any path reaches
/// [`greeting::greet`].
pub fn router(state: AppState) -> Router {
    CATCH_ALL
        .iter()
        .fold(Router::new(), |router, path| {
            router.route(path, any(greeting::greet))
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
