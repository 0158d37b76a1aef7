//! Repository for the `product_types` table.

use catalog_core::types::DbId;
use sqlx::PgConnection;

use crate::models::product_type::ProductType;

/// Column list for product_types queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for product types.
pub struct ProductTypeRepo;

impl ProductTypeRepo {
    /// List all product types, ordered by ID ascending.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ProductType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_types ORDER BY id ASC");
        sqlx::query_as::<_, ProductType>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a product type by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<ProductType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_types WHERE id = $1");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Whether a product type with exactly this name exists.
    pub async fn exists_by_name(conn: &mut PgConnection, name: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM product_types WHERE name = $1)")
                .bind(name)
                .fetch_one(&mut *conn)
                .await?;
        Ok(exists)
    }

    /// Number of stored product types.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product_types")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Create a new product type, returning the created row.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<ProductType, sqlx::Error> {
        let query = format!("INSERT INTO product_types (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Rename a product type. Returns `None` if no row with `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        name: &str,
    ) -> Result<Option<ProductType>, sqlx::Error> {
        let query =
            format!("UPDATE product_types SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a product type by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign key violation while any product references it.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_types WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
