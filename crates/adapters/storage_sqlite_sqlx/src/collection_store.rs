//! `SQLite` implementation of [`CollectionStore`].

use std::future::Future;

use sqlx::SqlitePool;

use objectstore_app::ports::CollectionStore;
use objectstore_domain::collection::Collection;
use objectstore_domain::error::ObjectStoreError;
use objectstore_domain::record::Record;

use crate::error::StorageError;

const SELECT_ALL: &str = "SELECT body FROM objects ORDER BY position";
const DELETE_ALL: &str = "DELETE FROM objects";
const INSERT: &str = "INSERT INTO objects (body) VALUES (?)";

/// `SQLite`-backed collection store.
///
/// Each record is one row holding its JSON encoding. Writes replace every
/// row inside a single transaction, so a failed write leaves the previous
/// collection intact.
pub struct SqliteCollectionStore {
    pool: SqlitePool,
}

impl SqliteCollectionStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn replace_all(pool: &SqlitePool, bodies: Vec<String>) -> Result<(), StorageError> {
    let count = bodies.len();
    let mut tx = pool.begin().await?;
    sqlx::query(DELETE_ALL).execute(&mut *tx).await?;
    for body in bodies {
        sqlx::query(INSERT).bind(body).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::trace!(count, "collection rows replaced");
    Ok(())
}

impl CollectionStore for SqliteCollectionStore {
    fn read_all(&self) -> impl Future<Output = Result<Collection, ObjectStoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<(String,)> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let records = rows
                .iter()
                .map(|(body,)| serde_json::from_str::<Record>(body))
                .collect::<Result<Vec<_>, _>>()
                .map_err(StorageError::from)?;

            Ok(Collection::from(records))
        }
    }

    fn write_all(
        &self,
        collection: &Collection,
    ) -> impl Future<Output = Result<(), ObjectStoreError>> + Send {
        let pool = self.pool.clone();
        let bodies = collection
            .records()
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>();
        async move {
            let bodies = bodies.map_err(StorageError::from)?;
            replace_all(&pool, bodies).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use objectstore_domain::id::ObjectId;
    use objectstore_domain::record::ObjectDraft;
    use serde_json::json;

    async fn setup() -> SqliteCollectionStore {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteCollectionStore::new(db.pool().clone())
    }

    fn sample() -> Collection {
        let mut collection = Collection::new();
        collection
            .insert(ObjectDraft::new("a").unwrap().with_field("tags", json!(["x"])))
            .unwrap();
        collection.insert(ObjectDraft::new("b").unwrap()).unwrap();
        collection
    }

    #[tokio::test]
    async fn should_return_empty_collection_when_nothing_written() {
        let store = setup().await;
        let collection = store.read_all().await.unwrap();
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn should_read_back_records_in_order() {
        let store = setup().await;
        store.write_all(&sample()).await.unwrap();

        let collection = store.read_all().await.unwrap();
        assert_eq!(collection, sample());
    }

    #[tokio::test]
    async fn should_replace_previous_rows_when_writing_again() {
        let store = setup().await;
        store.write_all(&sample()).await.unwrap();

        let mut smaller = sample();
        smaller.remove(ObjectId::FIRST).unwrap();
        store.write_all(&smaller).await.unwrap();

        let collection = store.read_all().await.unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].name, "b");
    }

    #[tokio::test]
    async fn should_return_storage_error_when_row_is_not_a_record() {
        let store = setup().await;
        sqlx::query(INSERT)
            .bind("{\"name\": \"missing id\"}")
            .execute(&store.pool)
            .await
            .unwrap();

        let result = store.read_all().await;
        assert!(matches!(result, Err(ObjectStoreError::Storage(_))));
    }
}
