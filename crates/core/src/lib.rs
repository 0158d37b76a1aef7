//! Domain types, errors, and validation rules for the product catalog.
//!
//! This crate has no I/O. Storage lives in `catalog-db`, orchestration and
//! the HTTP surface in `catalog-api`.

pub mod catalog;
pub mod error;
pub mod types;
