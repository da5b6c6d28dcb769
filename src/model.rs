//! Persisted entities.

use serde::{Deserialize, Serialize};

/// An airport row. `code` is the IATA-style natural key and is never
/// reassigned once the row exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Surrogate id of the terminal this airport is assigned to, if any.
    pub terminal_id: Option<i64>,
}

/// A terminal row. Terminal lifecycle belongs to an external collaborator;
/// this crate reads terminals only to validate airport references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub id: i64,
    pub name: String,
}
