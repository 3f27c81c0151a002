use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::greeting::build_response;
use crate::state::AppState;

pub async fn greet(State(state): State<AppState>) -> Response {
    json_response(&build_response(&state.version))
}

/// Status and content type are fixed before encoding, so a failed encode
/// is logged and answered with an empty body rather than a 500.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(bytes) => Body::from(bytes),
        Err(e) => {
            tracing::error!("error encoding response: {e}");
            Body::empty()
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
