//! Product type model.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_types` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or renaming a product type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductTypeInput {
    pub name: Option<String>,
}
