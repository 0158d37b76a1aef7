//! Repository for the `products` and `product_colours` tables.

use catalog_core::types::DbId;
use sqlx::PgConnection;

use crate::models::colour::Colour;
use crate::models::product::{Product, ProductSummary, ProductWrite};

/// Column list for the `products` table.
const COLUMNS: &str = "id, name, product_type_id, created_at, updated_at";

/// Column list for the `colours` table (used in JOIN queries).
const COLOUR_COLUMNS: &str = "c.id, c.name, c.created_at, c.updated_at";

/// Provides CRUD operations for products and their colour associations.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product and its colour associations.
    ///
    /// Run inside a transaction so the product row and its junction rows
    /// land together.
    pub async fn create(
        conn: &mut PgConnection,
        input: &ProductWrite,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, product_type_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.product_type_id)
            .fetch_one(&mut *conn)
            .await?;

        Self::set_colours(conn, product.id, &input.colour_ids).await?;
        Ok(product)
    }

    /// Find a product by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List every product as a summary row, newest (highest ID) first.
    ///
    /// Colour names are aggregated in colour ID order; a product with no
    /// colours gets an empty list.
    pub async fn list_summaries(
        conn: &mut PgConnection,
    ) -> Result<Vec<ProductSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProductSummary>(
            "SELECT p.id, p.name, pt.name AS product_type, \
                COALESCE( \
                    array_agg(c.name ORDER BY c.id) FILTER (WHERE c.id IS NOT NULL), \
                    '{}'::text[] \
                ) AS colours \
             FROM products p \
             JOIN product_types pt ON pt.id = p.product_type_id \
             LEFT JOIN product_colours pc ON pc.product_id = p.id \
             LEFT JOIN colours c ON c.id = pc.colour_id \
             GROUP BY p.id, p.name, pt.name \
             ORDER BY p.id DESC",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Replace name, product type, and colour set of a product.
    ///
    /// Returns `None` if no row with the given `id` exists, in which case
    /// the colour associations are left untouched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ProductWrite,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET name = $2, product_type_id = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.product_type_id)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(ref product) = product {
            Self::set_colours(conn, product.id, &input.colour_ids).await?;
        }
        Ok(product)
    }

    /// Delete a product by ID. Junction rows cascade.
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Colour association helpers
    // -----------------------------------------------------------------------

    /// Get all colours assigned to a product, ordered by colour ID.
    pub async fn colours_for_product(
        conn: &mut PgConnection,
        product_id: DbId,
    ) -> Result<Vec<Colour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLOUR_COLUMNS} \
             FROM colours c \
             JOIN product_colours pc ON pc.colour_id = c.id \
             WHERE pc.product_id = $1 \
             ORDER BY c.id"
        );
        sqlx::query_as::<_, Colour>(&query)
            .bind(product_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Replace all colour associations for a product.
    ///
    /// Deletes existing associations, then inserts the new set. Repeated
    /// IDs collapse into a single association.
    async fn set_colours(
        conn: &mut PgConnection,
        product_id: DbId,
        colour_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM product_colours WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *conn)
            .await?;

        for &colour_id in colour_ids {
            sqlx::query(
                "INSERT INTO product_colours (product_id, colour_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(colour_id)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
