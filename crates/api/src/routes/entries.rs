//! Route definitions for the entry catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Entry routes.
///
/// ```text
/// GET    /entries           -> list_entries
/// POST   /entries           -> create_entry
/// GET    /entries/{id}      -> get_entry
/// PATCH  /entries/{id}      -> update_entry
/// DELETE /entries/{id}      -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/entries",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route(
            "/entries/{id}",
            get(entries::get_entry)
                .patch(entries::update_entry)
                .delete(entries::delete_entry),
        )
}
