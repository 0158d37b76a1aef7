//! Validation and referential-integrity rules for catalog entities.
//!
//! Everything here is pure: callers fetch rows from storage and hand the
//! results in, these functions decide whether the write may proceed and
//! produce the user-facing message when it may not.

use std::fmt;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Entity kinds
// ---------------------------------------------------------------------------

/// The three kinds of record the catalog manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    ProductType,
    Colour,
}

impl EntityKind {
    /// Human-readable label used in error messages (e.g. "Product Type").
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Product => "Product",
            EntityKind::ProductType => "Product Type",
            EntityKind::Colour => "Colour",
        }
    }

    /// Lowercase noun used inside sentences (e.g. "product type").
    fn noun(self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::ProductType => "product type",
            EntityKind::Colour => "colour",
        }
    }

    /// Build the `NotFound` error for an id of this kind.
    pub fn not_found(self, id: DbId) -> CoreError {
        CoreError::NotFound {
            entity: self.label(),
            id,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Product types inserted on first boot when the table is empty.
pub const DEFAULT_PRODUCT_TYPES: &[&str] = &["Furniture", "Electronics", "Clothing"];

/// Colours inserted on first boot when the table is empty.
pub const DEFAULT_COLOURS: &[&str] = &["Red", "Blue", "Black", "White"];

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Returned when a product is created without a product type id.
pub const PRODUCT_TYPE_ID_REQUIRED: &str = "Product Type ID is required.";

const UPDATE_PRODUCT_TYPE_REQUIRED: &str = "Please provide a product type.";
const UPDATE_COLOURS_REQUIRED: &str = "Please provide at least one color.";

const COLOUR_IN_USE: &str =
    "Cannot delete colour. It is assigned to active products. Please remove it from those products first.";
const PRODUCT_TYPE_IN_USE: &str =
    "Cannot delete product type. It is being used in existing products.";

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Validate a name supplied on create.
///
/// Returns the trimmed name, or `Validation("<Entity> name cannot be empty.")`
/// when the name is missing, empty, or whitespace only.
pub fn validate_name(kind: EntityKind, name: Option<&str>) -> Result<&str, CoreError> {
    non_blank(name).ok_or_else(|| {
        CoreError::Validation(format!("{} name cannot be empty.", kind.label()))
    })
}

/// Validate a name supplied on update. Same rule as [`validate_name`],
/// worded as a prompt.
pub fn validate_update_name(kind: EntityKind, name: Option<&str>) -> Result<&str, CoreError> {
    non_blank(name)
        .ok_or_else(|| CoreError::Validation(format!("Please provide a {} name.", kind.noun())))
}

// ---------------------------------------------------------------------------
// Reference checks
// ---------------------------------------------------------------------------

/// Require a product type id on product create.
pub fn require_product_type_id(id: Option<DbId>) -> Result<DbId, CoreError> {
    id.ok_or_else(|| CoreError::Validation(PRODUCT_TYPE_ID_REQUIRED.to_string()))
}

/// Compare the colours storage resolved against the ids the caller asked for.
///
/// The comparison is by count: storage yields one row per distinct id, so a
/// request is accepted only when every requested entry produced a row. The
/// error lists both sides so the caller can see which ids were missing.
pub fn check_colours_resolved(found: &[DbId], expected: &[DbId]) -> Result<(), CoreError> {
    if found.len() == expected.len() {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "One or more selected colours are invalid. Found: {}, Expected: {}",
        format_ids(found),
        format_ids(expected)
    )))
}

/// Required fields for a product update, checked before any lookup.
///
/// Unlike create, update needs a non-empty colour list.
pub fn validate_product_update<'a>(
    name: Option<&'a str>,
    product_type_id: Option<DbId>,
    colour_ids: Option<&[DbId]>,
) -> Result<(&'a str, DbId), CoreError> {
    let name = validate_update_name(EntityKind::Product, name)?;
    let product_type_id = product_type_id
        .ok_or_else(|| CoreError::Validation(UPDATE_PRODUCT_TYPE_REQUIRED.to_string()))?;
    match colour_ids {
        Some(ids) if !ids.is_empty() => Ok((name, product_type_id)),
        _ => Err(CoreError::Validation(UPDATE_COLOURS_REQUIRED.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Delete protection
// ---------------------------------------------------------------------------

/// The conflict raised when deleting a record still referenced by products.
///
/// Products are never referenced by anything, so they have no such conflict.
pub fn in_use_conflict(kind: EntityKind) -> Option<CoreError> {
    let msg = match kind {
        EntityKind::Colour => COLOUR_IN_USE,
        EntityKind::ProductType => PRODUCT_TYPE_IN_USE,
        EntityKind::Product => return None,
    };
    Some(CoreError::Conflict(msg.to_string()))
}

/// Render ids as `[1, 2, 3]`.
fn format_ids(ids: &[DbId]) -> String {
    let joined = ids
        .iter()
        .map(DbId::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
