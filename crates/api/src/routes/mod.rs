pub mod entries;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /entries                  list (?genre=), create
/// /entries/{id}             get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(entries::router())
}
