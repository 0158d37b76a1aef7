//! Integration tests for the catalog repositories.
//!
//! Exercises the repository layer against a real database:
//! - Product type and colour CRUD
//! - Product create/update with junction table management
//! - Summary projection ordering and aggregation
//! - Foreign key refusals that back the delete-protection policy
//! - Transaction rollback leaving no partial writes

use catalog_db::models::product::ProductWrite;
use catalog_db::repositories::{ColourRepo, ProductRepo, ProductTypeRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, product_type_id: i64, colour_ids: Vec<i64>) -> ProductWrite {
    ProductWrite {
        name: name.to_string(),
        product_type_id,
        colour_ids,
    }
}

// ---------------------------------------------------------------------------
// Test: Product type CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_type_crud(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let created = ProductTypeRepo::create(&mut conn, "Furniture").await.unwrap();
    assert_eq!(created.name, "Furniture");

    let found = ProductTypeRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .expect("product type should exist");
    assert_eq!(found, created);

    let renamed = ProductTypeRepo::update(&mut conn, created.id, "Home Furniture")
        .await
        .unwrap()
        .expect("update should return the row");
    assert_eq!(renamed.name, "Home Furniture");
    assert!(renamed.updated_at >= created.updated_at);

    assert!(ProductTypeRepo::exists_by_name(&mut conn, "Home Furniture")
        .await
        .unwrap());
    assert!(!ProductTypeRepo::exists_by_name(&mut conn, "Furniture")
        .await
        .unwrap());

    assert!(ProductTypeRepo::delete(&mut conn, created.id).await.unwrap());
    assert!(ProductTypeRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ProductTypeRepo::delete(&mut conn, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(ProductTypeRepo::update(&mut conn, 999_999, "Ghost")
        .await
        .unwrap()
        .is_none());
    assert!(ColourRepo::update(&mut conn, 999_999, "Ghost")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Colour lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_colour_list_and_find_by_ids(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let red = ColourRepo::create(&mut conn, "Red").await.unwrap();
    let blue = ColourRepo::create(&mut conn, "Blue").await.unwrap();

    let all = ColourRepo::list(&mut conn).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, red.id, "list is ordered by id ascending");
    assert_eq!(ColourRepo::count(&mut conn).await.unwrap(), 2);

    // Unknown ids are absent; repeated ids yield a single row.
    let found = ColourRepo::find_by_ids(&mut conn, &[blue.id, 999_999, blue.id, red.id])
        .await
        .unwrap();
    let ids: Vec<i64> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![red.id, blue.id]);
}

// ---------------------------------------------------------------------------
// Test: Product with colour associations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_create_and_replace_colours(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let electronics = ProductTypeRepo::create(&mut conn, "Electronics").await.unwrap();
    let clothing = ProductTypeRepo::create(&mut conn, "Clothing").await.unwrap();
    let black = ColourRepo::create(&mut conn, "Black").await.unwrap();
    let white = ColourRepo::create(&mut conn, "White").await.unwrap();

    let product = ProductRepo::create(
        &mut conn,
        &new_product("Laptop", electronics.id, vec![black.id, white.id]),
    )
    .await
    .unwrap();
    assert_eq!(product.name, "Laptop");
    assert_eq!(product.product_type_id, electronics.id);

    let colours = ProductRepo::colours_for_product(&mut conn, product.id)
        .await
        .unwrap();
    assert_eq!(colours.len(), 2);

    let updated = ProductRepo::update(
        &mut conn,
        product.id,
        &new_product("Jacket", clothing.id, vec![white.id]),
    )
    .await
    .unwrap()
    .expect("product should exist");
    assert_eq!(updated.name, "Jacket");
    assert_eq!(updated.product_type_id, clothing.id);

    let colours = ProductRepo::colours_for_product(&mut conn, product.id)
        .await
        .unwrap();
    assert_eq!(colours.len(), 1);
    assert_eq!(colours[0].id, white.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_product_returns_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let kind = ProductTypeRepo::create(&mut conn, "Furniture").await.unwrap();
    let result = ProductRepo::update(&mut conn, 999_999, &new_product("Ghost", kind.id, vec![]))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_summaries_newest_first(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let kind = ProductTypeRepo::create(&mut conn, "Furniture").await.unwrap();
    let red = ColourRepo::create(&mut conn, "Red").await.unwrap();
    let blue = ColourRepo::create(&mut conn, "Blue").await.unwrap();

    let first = ProductRepo::create(&mut conn, &new_product("Chair", kind.id, vec![]))
        .await
        .unwrap();
    let second = ProductRepo::create(
        &mut conn,
        &new_product("Table", kind.id, vec![blue.id, red.id]),
    )
    .await
    .unwrap();

    let summaries = ProductRepo::list_summaries(&mut conn).await.unwrap();
    assert_eq!(summaries.len(), 2);

    assert_eq!(summaries[0].id, second.id);
    assert_eq!(summaries[0].name, "Table");
    assert_eq!(summaries[0].product_type, "Furniture");
    assert_eq!(summaries[0].colours, vec!["Red", "Blue"]);

    assert_eq!(summaries[1].id, first.id);
    assert!(summaries[1].colours.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Foreign key refusals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_referenced_rows_cannot_be_deleted(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let kind = ProductTypeRepo::create(&mut conn, "Electronics").await.unwrap();
    let black = ColourRepo::create(&mut conn, "Black").await.unwrap();
    let product = ProductRepo::create(&mut conn, &new_product("Laptop", kind.id, vec![black.id]))
        .await
        .unwrap();

    let err = ColourRepo::delete(&mut conn, black.id).await.unwrap_err();
    assert!(catalog_db::is_foreign_key_violation(&err), "got {err:?}");

    let err = ProductTypeRepo::delete(&mut conn, kind.id).await.unwrap_err();
    assert!(catalog_db::is_foreign_key_violation(&err), "got {err:?}");

    // Deleting the product releases both references.
    assert!(ProductRepo::delete(&mut conn, product.id).await.unwrap());
    assert!(ColourRepo::delete(&mut conn, black.id).await.unwrap());
    assert!(ProductTypeRepo::delete(&mut conn, kind.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_product_bad_type(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let result = ProductRepo::create(&mut conn, &new_product("Ghost", 999_999, vec![])).await;
    let err = result.unwrap_err();
    assert!(catalog_db::is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_fk_errors_are_not_classified(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    // Blank names trip the CHECK constraint, not a foreign key.
    let err = ColourRepo::create(&mut conn, "   ").await.unwrap_err();
    assert!(!catalog_db::is_foreign_key_violation(&err));
    assert!(!catalog_db::is_foreign_key_violation(&sqlx::Error::RowNotFound));
}

// ---------------------------------------------------------------------------
// Test: Rolled-back transaction leaves nothing behind
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_product_write_rolls_back(pool: PgPool) {
    let kind = {
        let mut conn = pool.acquire().await.unwrap();
        ProductTypeRepo::create(&mut conn, "Furniture").await.unwrap()
    };

    let mut tx = pool.begin().await.unwrap();
    // Colour 999_999 does not exist, so the junction insert fails after the
    // product row was written.
    let result =
        ProductRepo::create(&mut tx, &new_product("Sofa", kind.id, vec![999_999])).await;
    assert!(result.is_err());
    drop(tx);

    let mut conn = pool.acquire().await.unwrap();
    let summaries = ProductRepo::list_summaries(&mut conn).await.unwrap();
    assert!(summaries.is_empty(), "no product row should survive rollback");
}
