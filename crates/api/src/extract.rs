//! Custom extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use catalog_core::types::DbId;

use crate::error::AppError;

/// Entry id taken from the `{id}` path segment.
///
/// A segment that is not an integer is not a client-recoverable condition
/// for this API; it surfaces as a generic internal error, the same as any
/// other unhandled fault.
#[derive(Debug, Clone, Copy)]
pub struct EntryId(pub DbId);

impl<S> FromRequestParts<S> for EntryId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InternalError(rejection.body_text()))?;
        Ok(EntryId(id))
    }
}
