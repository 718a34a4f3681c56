use catalog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `entries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i64,
}
