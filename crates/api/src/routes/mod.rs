pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /              upload form (GET)
/// /obfuscate     submit a script (POST, multipart/form-data)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/obfuscate", post(handlers::obfuscate::obfuscate))
}
