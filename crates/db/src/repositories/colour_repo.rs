//! Repository for the `colours` table.

use catalog_core::types::DbId;
use sqlx::PgConnection;

use crate::models::colour::Colour;

/// Column list for colours queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for colours.
pub struct ColourRepo;

impl ColourRepo {
    /// List all colours, ordered by ID ascending.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Colour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colours ORDER BY id ASC");
        sqlx::query_as::<_, Colour>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a colour by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Colour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colours WHERE id = $1");
        sqlx::query_as::<_, Colour>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Fetch the colours whose IDs appear in `ids`, one row per distinct ID,
    /// ordered by ID. Unknown IDs are simply absent from the result.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<Colour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colours WHERE id = ANY($1) ORDER BY id ASC");
        sqlx::query_as::<_, Colour>(&query)
            .bind(ids)
            .fetch_all(&mut *conn)
            .await
    }

    /// Number of stored colours.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colours")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Create a new colour, returning the created row.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<Colour, sqlx::Error> {
        let query = format!("INSERT INTO colours (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Colour>(&query)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Rename a colour. Returns `None` if no row with `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        name: &str,
    ) -> Result<Option<Colour>, sqlx::Error> {
        let query =
            format!("UPDATE colours SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Colour>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a colour by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign key violation while any product is assigned it.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM colours WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
