use async_trait::async_trait;
use snip_core::store::{ReadStore, Result, Store};
use snip_core::{ShortId, StorageError, UrlAssociation};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

const SCHEMA: &str = include_str!("../ddl/mysql/url_associations.sql");

/// MySQL implementation of the store contract.
///
/// Rows are keyed by an auto-increment `doc_id`; the short id lives in the
/// indexed but non-unique `uuid` column. Mutations find the `doc_id` first and
/// then act on it in a separate statement, without a transaction.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `url_associations` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_doc_id(&self, id: &ShortId) -> Result<Option<u64>> {
        let row = sqlx::query(
            r#"
            SELECT doc_id
            FROM url_associations
            WHERE uuid = ?
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|row| row.try_get::<u64, _>("doc_id"))
            .transpose()
            .map_err(map_sqlx_error)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn row_to_association(row: &MySqlRow) -> Result<UrlAssociation> {
    let uuid: String = row.try_get("uuid").map_err(map_sqlx_error)?;
    let url: String = row.try_get("url").map_err(map_sqlx_error)?;
    let id = ShortId::new(uuid).map_err(|e| StorageError::InvalidData(e.to_string()))?;
    Ok(UrlAssociation::new(id, url))
}

#[async_trait]
impl ReadStore for MySqlStore {
    async fn list_all(&self) -> Result<Vec<UrlAssociation>> {
        let rows = sqlx::query(
            r#"
            SELECT uuid, url
            FROM url_associations
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_association).collect()
    }

    async fn find_by_id(&self, id: &ShortId) -> Result<Option<UrlAssociation>> {
        let row = sqlx::query(
            r#"
            SELECT uuid, url
            FROM url_associations
            WHERE uuid = ?
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_association).transpose()
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn insert(&self, association: UrlAssociation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO url_associations (uuid, url)
            VALUES (?, ?)
            "#,
        )
        .bind(association.id.as_str())
        .bind(association.target_url)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &ShortId) -> Result<bool> {
        let Some(doc_id) = self.find_doc_id(id).await? else {
            return Ok(false);
        };

        sqlx::query(
            r#"
            DELETE FROM url_associations
            WHERE doc_id = ?
            "#,
        )
        .bind(doc_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(true)
    }

    async fn update_target(&self, id: &ShortId, target_url: &str) -> Result<bool> {
        let Some(doc_id) = self.find_doc_id(id).await? else {
            return Ok(false);
        };

        sqlx::query(
            r#"
            UPDATE url_associations
            SET url = ?
            WHERE doc_id = ?
            "#,
        )
        .bind(target_url)
        .bind(doc_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(true)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
