//! Product type operations.

use catalog_core::catalog::{self, EntityKind};
use catalog_core::types::DbId;
use catalog_db::models::product_type::{ProductType, ProductTypeInput};
use catalog_db::repositories::ProductTypeRepo;
use catalog_db::DbPool;

use super::{integrity, rejected};
use crate::error::AppResult;

/// All product types, ordered by ID.
pub async fn list(pool: &DbPool) -> AppResult<Vec<ProductType>> {
    let mut conn = pool.acquire().await?;
    let product_types = ProductTypeRepo::list(&mut conn).await?;
    tracing::info!(count = product_types.len(), "Retrieved product types");
    Ok(product_types)
}

/// Create a product type after checking its name is not blank.
pub async fn create(pool: &DbPool, input: &ProductTypeInput) -> AppResult<ProductType> {
    let name = catalog::validate_name(EntityKind::ProductType, input.name.as_deref())
        .map_err(|e| rejected("create_product_type", e))?;

    let mut tx = pool.begin().await?;
    let product_type = ProductTypeRepo::create(&mut tx, name).await?;
    tx.commit().await?;

    tracing::info!(product_type_id = product_type.id, name = %product_type.name, "Product type created");
    Ok(product_type)
}

/// Rename a product type.
pub async fn update(pool: &DbPool, id: DbId, input: &ProductTypeInput) -> AppResult<ProductType> {
    let name = catalog::validate_update_name(EntityKind::ProductType, input.name.as_deref())
        .map_err(|e| rejected("update_product_type", e))?;

    let mut tx = pool.begin().await?;
    let product_type = ProductTypeRepo::update(&mut tx, id, name)
        .await?
        .ok_or_else(|| rejected("update_product_type", EntityKind::ProductType.not_found(id)))?;
    tx.commit().await?;

    tracing::info!(product_type_id = id, name = %product_type.name, "Product type updated");
    Ok(product_type)
}

/// Delete a product type that no product is using.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    tracing::warn!(product_type_id = id, "Attempting to delete product type");

    let mut tx = pool.begin().await?;
    if ProductTypeRepo::find_by_id(&mut tx, id).await?.is_none() {
        return Err(rejected("delete_product_type", EntityKind::ProductType.not_found(id)));
    }
    let outcome = ProductTypeRepo::delete(&mut tx, id).await;
    integrity::guard_referenced_deletion(EntityKind::ProductType, id, outcome)?;
    tx.commit().await?;

    tracing::info!(product_type_id = id, "Product type deleted");
    Ok(())
}
