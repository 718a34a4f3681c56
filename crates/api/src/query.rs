//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /entries` (`?genre=`).
#[derive(Debug, Default, Deserialize)]
pub struct EntryListParams {
    pub genre: Option<String>,
}

impl EntryListParams {
    /// The genre filter, if one was given. An empty `?genre=` means no filter.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
