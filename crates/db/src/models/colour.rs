//! Colour model.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `colours` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Colour {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or renaming a colour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColourInput {
    pub name: Option<String>,
}
