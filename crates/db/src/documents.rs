//! Repository for the `documents` table.
//!
//! Records are opaque JSONB payloads bucketed by a collection
//! discriminator string (e.g. `"inquiry"`). Ids are v7 UUIDs generated
//! app-side so insertion order and id order agree.

use sqlx::PgPool;
use uuid::Uuid;

/// Generic create/read-by-collection access to the `documents` table.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a record into `collection`, returning the generated id.
    ///
    /// Every call inserts a fresh row: there is no deduplication, so two
    /// identical records produce two rows with distinct ids.
    pub async fn create_document(
        pool: &PgPool,
        collection: &str,
        record: &serde_json::Value,
    ) -> Result<Uuid, sqlx::Error> {
        let id = Uuid::now_v7();

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO documents (id, collection, record) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(id)
        .bind(collection)
        .bind(record)
        .fetch_one(pool)
        .await?;

        tracing::debug!(%id, collection, "Document created");
        Ok(id)
    }

    /// List all records in `collection`, oldest first.
    pub async fn get_documents(
        pool: &PgPool,
        collection: &str,
    ) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT record FROM documents WHERE collection = $1 ORDER BY created_at, id",
        )
        .bind(collection)
        .fetch_all(pool)
        .await
    }
}
