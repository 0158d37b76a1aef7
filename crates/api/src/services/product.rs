//! Product operations.
//!
//! Create and update differ on purpose: create rejects a request naming an
//! unknown colour, while update requires at least one colour id and keeps
//! only the ids that resolve.

use catalog_core::catalog::{self, EntityKind};
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::colour::Colour;
use catalog_db::models::product::{ProductDetail, ProductInput, ProductSummary, ProductWrite};
use catalog_db::repositories::{ProductRepo, ProductTypeRepo};
use catalog_db::DbPool;

use super::{integrity, rejected};
use crate::error::AppResult;

fn colour_ids(colours: &[Colour]) -> Vec<DbId> {
    colours.iter().map(|c| c.id).collect()
}

/// Create a product.
///
/// Checks run in order (name, product type id present, product type exists,
/// colours exist) and the first failure aborts before anything is written.
pub async fn create(pool: &DbPool, input: &ProductInput) -> AppResult<ProductDetail> {
    tracing::info!(name = ?input.name, "Creating product");

    let name = catalog::validate_name(EntityKind::Product, input.name.as_deref())
        .map_err(|e| rejected("create_product", e))?;
    let product_type_id = catalog::require_product_type_id(input.product_type_id)
        .map_err(|e| rejected("create_product", e))?;
    let requested = input.colour_ids.as_deref().unwrap_or_default();

    let mut tx = pool.begin().await?;
    let product_type = integrity::resolve_product_type(&mut tx, product_type_id).await?;
    let colours = integrity::resolve_colours(&mut tx, requested).await?;

    let write = ProductWrite {
        name: name.to_string(),
        product_type_id,
        colour_ids: colour_ids(&colours),
    };
    let product = ProductRepo::create(&mut tx, &write).await?;
    tx.commit().await?;

    tracing::info!(
        product_id = product.id,
        product_type_id,
        colour_count = colours.len(),
        "Product created"
    );
    Ok(ProductDetail::new(product, product_type, colours))
}

/// All products as list projections, newest first.
pub async fn list(pool: &DbPool) -> AppResult<Vec<ProductSummary>> {
    let mut conn = pool.acquire().await?;
    let products = ProductRepo::list_summaries(&mut conn).await?;
    tracing::info!(count = products.len(), "Fetched products");
    Ok(products)
}

/// A single product with its product type and colours.
pub async fn get(pool: &DbPool, id: DbId) -> AppResult<ProductDetail> {
    let mut conn = pool.acquire().await?;
    let product = ProductRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| rejected("get_product", EntityKind::Product.not_found(id)))?;

    // The foreign key guarantees the type exists.
    let product_type = ProductTypeRepo::find_by_id(&mut conn, product.product_type_id)
        .await?
        .ok_or_else(|| {
            CoreError::Internal(format!(
                "product {id} references missing product type {}",
                product.product_type_id
            ))
        })?;
    let colours = ProductRepo::colours_for_product(&mut conn, id).await?;

    tracing::debug!(product_id = id, name = %product.name, "Fetched product");
    Ok(ProductDetail::new(product, product_type, colours))
}

/// Replace a product's name, product type, and colour set.
pub async fn update(pool: &DbPool, id: DbId, input: &ProductInput) -> AppResult<ProductDetail> {
    tracing::info!(product_id = id, "Updating product");

    let (name, product_type_id) = catalog::validate_product_update(
        input.name.as_deref(),
        input.product_type_id,
        input.colour_ids.as_deref(),
    )
    .map_err(|e| rejected("update_product", e))?;
    let requested = input.colour_ids.as_deref().unwrap_or_default();

    let mut tx = pool.begin().await?;
    if ProductRepo::find_by_id(&mut tx, id).await?.is_none() {
        return Err(rejected("update_product", EntityKind::Product.not_found(id)));
    }
    let product_type = integrity::resolve_product_type(&mut tx, product_type_id).await?;
    let colours = integrity::resolve_known_colours(&mut tx, requested).await?;

    let write = ProductWrite {
        name: name.to_string(),
        product_type_id,
        colour_ids: colour_ids(&colours),
    };
    let product = ProductRepo::update(&mut tx, id, &write)
        .await?
        .ok_or_else(|| rejected("update_product", EntityKind::Product.not_found(id)))?;
    tx.commit().await?;

    tracing::info!(product_id = id, name = %product.name, "Product updated");
    Ok(ProductDetail::new(product, product_type, colours))
}

/// Delete a product. Nothing references products, so no guard applies.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    tracing::warn!(product_id = id, "Attempting to delete product");

    let mut tx = pool.begin().await?;
    if !ProductRepo::delete(&mut tx, id).await? {
        return Err(rejected("delete_product", EntityKind::Product.not_found(id)));
    }
    tx.commit().await?;

    tracing::info!(product_id = id, "Product deleted");
    Ok(())
}
