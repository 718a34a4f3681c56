//! Domain types shared by the catalog crates.
//!
//! Holds the primitive type aliases, the domain error type and the payload
//! validator that turns raw request bodies into typed entry records.

pub mod entry;
pub mod error;
pub mod types;
