//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row plus the `Deserialize` request bodies for that entity.
//! Request fields are optional so that missing values reach validation
//! instead of failing JSON extraction.

pub mod colour;
pub mod product;
pub mod product_type;
