//! Reference resolution and delete protection.
//!
//! Products point at one product type and a set of colours. These helpers
//! run inside the caller's transaction so a resolved reference cannot vanish
//! before the write that depends on it commits.

use catalog_core::catalog::{self, EntityKind};
use catalog_core::types::DbId;
use catalog_db::models::colour::Colour;
use catalog_db::models::product_type::ProductType;
use catalog_db::repositories::{ColourRepo, ProductTypeRepo};
use sqlx::PgConnection;

use super::rejected;
use crate::error::AppResult;

/// Look up the product type a product should reference.
pub async fn resolve_product_type(conn: &mut PgConnection, id: DbId) -> AppResult<ProductType> {
    ProductTypeRepo::find_by_id(conn, id)
        .await?
        .ok_or_else(|| rejected("resolve_product_type", EntityKind::ProductType.not_found(id)))
}

/// Resolve every requested colour, rejecting the request if any is unknown.
///
/// Validation is by count of resolved rows against requested ids, see
/// [`catalog::check_colours_resolved`].
pub async fn resolve_colours(conn: &mut PgConnection, ids: &[DbId]) -> AppResult<Vec<Colour>> {
    let colours = ColourRepo::find_by_ids(conn, ids).await?;
    let found: Vec<DbId> = colours.iter().map(|c| c.id).collect();
    catalog::check_colours_resolved(&found, ids)
        .map_err(|e| rejected("resolve_colours", e))?;
    Ok(colours)
}

/// Resolve the requested colours, silently dropping ids that do not exist.
pub async fn resolve_known_colours(
    conn: &mut PgConnection,
    ids: &[DbId],
) -> AppResult<Vec<Colour>> {
    let colours = ColourRepo::find_by_ids(conn, ids).await?;
    if colours.len() != ids.len() {
        tracing::debug!(
            requested = ids.len(),
            resolved = colours.len(),
            "Dropping unresolvable colour ids"
        );
    }
    Ok(colours)
}

/// Translate the outcome of a physical delete into a domain result.
///
/// A foreign key violation means the record is still referenced by at least
/// one product and becomes a `Conflict` naming the entity kind. A delete that
/// removed no row is `NotFound`. Any other database error passes through
/// unchanged.
pub fn guard_referenced_deletion(
    kind: EntityKind,
    id: DbId,
    outcome: Result<bool, sqlx::Error>,
) -> AppResult<()> {
    match outcome {
        Err(err) if catalog_db::is_foreign_key_violation(&err) => {
            match catalog::in_use_conflict(kind) {
                Some(conflict) => {
                    tracing::error!(entity = %kind, id, "Delete refused: still referenced by products");
                    Err(conflict.into())
                }
                None => Err(err.into()),
            }
        }
        Err(err) => Err(err.into()),
        Ok(true) => Ok(()),
        Ok(false) => Err(rejected("delete", kind.not_found(id))),
    }
}
