//! First-boot seeding of default product types and colours.
//!
//! Each table is seeded independently and only when it is empty, so a
//! restart never duplicates rows and a table the user has emptied on
//! purpose stays empty only until the next boot.

use catalog_core::catalog::{DEFAULT_COLOURS, DEFAULT_PRODUCT_TYPES};

use crate::repositories::{ColourRepo, ProductTypeRepo};
use crate::DbPool;

/// What [`seed_defaults`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub product_types: usize,
    pub colours: usize,
}

/// Insert the default product types and colours into empty tables.
pub async fn seed_defaults(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    let mut tx = pool.begin().await?;
    if ProductTypeRepo::count(&mut tx).await? == 0 {
        for name in DEFAULT_PRODUCT_TYPES {
            ProductTypeRepo::create(&mut tx, name).await?;
        }
        report.product_types = DEFAULT_PRODUCT_TYPES.len();
    }
    tx.commit().await?;
    if report.product_types > 0 {
        tracing::info!(count = report.product_types, "Product types loaded successfully");
    }

    let mut tx = pool.begin().await?;
    if ColourRepo::count(&mut tx).await? == 0 {
        for name in DEFAULT_COLOURS {
            ColourRepo::create(&mut tx, name).await?;
        }
        report.colours = DEFAULT_COLOURS.len();
    }
    tx.commit().await?;
    if report.colours > 0 {
        tracing::info!(count = report.colours, "Colours loaded successfully");
    }

    Ok(report)
}
