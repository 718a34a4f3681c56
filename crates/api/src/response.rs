//! Response bodies shared by the entry handlers.

use catalog_core::types::DbId;
use serde::Serialize;

/// Plain `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body returned by `POST /entries`: `{ "message": ..., "entry": { "id": ... } }`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub entry: CreatedEntry,
}

#[derive(Debug, Serialize)]
pub struct CreatedEntry {
    pub id: DbId,
}
