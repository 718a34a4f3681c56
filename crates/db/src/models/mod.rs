//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Write payloads live in `catalog_core` because they are
//! validated before they reach this crate.

pub mod entry;
