//! Colour operations.

use catalog_core::catalog::{self, EntityKind};
use catalog_core::types::DbId;
use catalog_db::models::colour::{Colour, ColourInput};
use catalog_db::repositories::ColourRepo;
use catalog_db::DbPool;

use super::{integrity, rejected};
use crate::error::AppResult;

/// All colours, ordered by ID.
pub async fn list(pool: &DbPool) -> AppResult<Vec<Colour>> {
    let mut conn = pool.acquire().await?;
    let colours = ColourRepo::list(&mut conn).await?;
    tracing::info!(count = colours.len(), "Retrieved colours");
    Ok(colours)
}

/// Create a colour after checking its name is not blank.
pub async fn create(pool: &DbPool, input: &ColourInput) -> AppResult<Colour> {
    let name = catalog::validate_name(EntityKind::Colour, input.name.as_deref())
        .map_err(|e| rejected("create_colour", e))?;

    let mut tx = pool.begin().await?;
    let colour = ColourRepo::create(&mut tx, name).await?;
    tx.commit().await?;

    tracing::info!(colour_id = colour.id, name = %colour.name, "Colour created");
    Ok(colour)
}

/// Rename a colour.
pub async fn update(pool: &DbPool, id: DbId, input: &ColourInput) -> AppResult<Colour> {
    let name = catalog::validate_update_name(EntityKind::Colour, input.name.as_deref())
        .map_err(|e| rejected("update_colour", e))?;

    let mut tx = pool.begin().await?;
    let colour = ColourRepo::update(&mut tx, id, name)
        .await?
        .ok_or_else(|| rejected("update_colour", EntityKind::Colour.not_found(id)))?;
    tx.commit().await?;

    tracing::info!(colour_id = id, name = %colour.name, "Colour updated");
    Ok(colour)
}

/// Delete a colour that no product is using.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    tracing::warn!(colour_id = id, "Attempting to delete colour");

    let mut tx = pool.begin().await?;
    if ColourRepo::find_by_id(&mut tx, id).await?.is_none() {
        return Err(rejected("delete_colour", EntityKind::Colour.not_found(id)));
    }
    let outcome = ColourRepo::delete(&mut tx, id).await;
    integrity::guard_referenced_deletion(EntityKind::Colour, id, outcome)?;
    tx.commit().await?;

    tracing::info!(colour_id = id, "Colour deleted");
    Ok(())
}
