//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&mut PgConnection` as the first argument. Callers pass a pooled
//! connection for reads and a transaction for writes, so a whole service
//! operation commits or rolls back as one unit.

pub mod colour_repo;
pub mod product_repo;
pub mod product_type_repo;

pub use colour_repo::ColourRepo;
pub use product_repo::ProductRepo;
pub use product_type_repo::ProductTypeRepo;
