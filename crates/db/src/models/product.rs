//! Product model, its colour associations, and the list projection.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::colour::Colour;
use super::product_type::ProductType;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub product_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product with its product type and colours resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: DbId,
    pub name: String,
    pub product_type: ProductType,
    pub colours: Vec<Colour>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductDetail {
    pub fn new(product: Product, product_type: ProductType, colours: Vec<Colour>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            product_type,
            colours,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// List-view projection: type and colour names instead of ids.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub product_type: String,
    pub colours: Vec<String>,
}

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: Option<String>,
    pub product_type_id: Option<DbId>,
    pub colour_ids: Option<Vec<DbId>>,
}

/// Validated values written to `products` and `product_colours`.
#[derive(Debug, Clone)]
pub struct ProductWrite {
    pub name: String,
    pub product_type_id: DbId,
    /// Ids already resolved against `colours`.
    pub colour_ids: Vec<DbId>,
}
