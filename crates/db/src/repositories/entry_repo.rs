//! Repository for the `entries` table.

use catalog_core::entry::EntryInput;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::entry::Entry;

/// Column list for `entries` queries.
const COLUMNS: &str = "id, title, director, genre, year";

/// Provides CRUD operations for catalog entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the assigned id.
    pub async fn create(pool: &SqlitePool, input: &EntryInput) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO entries (title, director, genre, year) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.director)
        .bind(&input.genre)
        .bind(input.year)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find an entry by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = ?1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every entry in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries ORDER BY id");
        sqlx::query_as::<_, Entry>(&query).fetch_all(pool).await
    }

    /// List entries whose genre equals `genre`, ignoring ASCII case.
    pub async fn list_by_genre(pool: &SqlitePool, genre: &str) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries \
             WHERE lower(genre) = lower(?1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(genre)
            .fetch_all(pool)
            .await
    }

    /// Overwrite all mutable fields of an entry.
    ///
    /// Returns `None` if no entry with the given id exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &EntryInput,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!(
            "UPDATE entries SET \
                 title = ?2, \
                 director = ?3, \
                 genre = ?4, \
                 year = ?5 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
