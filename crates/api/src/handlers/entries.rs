//! Handlers for the entry catalog.
//!
//! Write handlers read the raw body and run it through
//! [`decode_entry`] so that every required field is checked before anything
//! touches the database.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::entry::{decode_entry, EntryInput};
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::repositories::EntryRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::EntryId;
use crate::query::EntryListParams;
use crate::response::{CreatedEntry, CreatedResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Entry";

/// GET /entries
///
/// List all entries, or only those whose genre matches `?genre=` ignoring case.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<EntryListParams>,
) -> AppResult<impl IntoResponse> {
    let entries = match params.genre() {
        Some(genre) => EntryRepo::list_by_genre(&state.pool, genre).await?,
        None => EntryRepo::list(&state.pool).await?,
    };

    Ok(Json(entries))
}

/// POST /entries
///
/// Validate the payload and persist a new entry.
pub async fn create_entry(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input = decode_body(&body)?;
    let id = EntryRepo::create(&state.pool, &input).await?;

    tracing::info!(entry_id = id, genre = %input.genre, "Entry created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Entry added successfully!",
            entry: CreatedEntry { id },
        }),
    ))
}

/// GET /entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    EntryId(id): EntryId,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(entry))
}

/// PATCH /entries/{id}
///
/// Overwrite all four fields of an existing entry. The existence check runs
/// before payload validation, so an unknown id is reported as 404 even when
/// the body is also invalid.
pub async fn update_entry(
    State(state): State<AppState>,
    EntryId(id): EntryId,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    if EntryRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    let input = decode_body(&body)?;

    // The row can disappear between the lookup and the write.
    EntryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(entry_id = id, "Entry updated");

    Ok(Json(MessageResponse {
        message: "Entry updated successfully!",
    }))
}

/// DELETE /entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    EntryId(id): EntryId,
) -> AppResult<impl IntoResponse> {
    let deleted = EntryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(entry_id = id, "Entry deleted");

    Ok(Json(MessageResponse {
        message: "Entry deleted successfully!",
    }))
}

/// Parse the body as JSON and validate it. Anything that is not JSON is
/// validated as an empty payload, so the client gets per-field messages.
fn decode_body(body: &[u8]) -> Result<EntryInput, AppError> {
    let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    Ok(decode_entry(&payload)?)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
