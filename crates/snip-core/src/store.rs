use crate::association::UrlAssociation;
use crate::error::StorageError;
use crate::short_id::ShortId;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Read access to the association collection.
///
/// Associations are addressed by their `uuid` field, which is not the
/// backend's native record key. Lookups are limited to the first match, so a
/// query yields zero or one association.
#[async_trait]
pub trait ReadStore: Send + Sync + 'static {
    /// Returns every stored association. Order is unspecified.
    async fn list_all(&self) -> Result<Vec<UrlAssociation>>;

    /// Finds the association whose `uuid` equals `id`.
    /// Returns `None` if there is no such record.
    async fn find_by_id(&self, id: &ShortId) -> Result<Option<UrlAssociation>>;
}

/// Read-write access to the association collection.
///
/// `delete_by_id` and `update_target` first look the record up by `uuid` and
/// then act on the native key they found. The two steps are not atomic: a
/// concurrent delete or update of the same id may interleave between them.
#[async_trait]
pub trait Store: ReadStore {
    /// Appends a new record under a fresh native key.
    async fn insert(&self, association: UrlAssociation) -> Result<()>;

    /// Removes the record for `id`.
    /// Returns `false` if the lookup matched nothing.
    async fn delete_by_id(&self, id: &ShortId) -> Result<bool>;

    /// Replaces the target URL of the record for `id`, leaving other fields alone.
    /// Returns `false` if the lookup matched nothing.
    async fn update_target(&self, id: &ShortId, target_url: &str) -> Result<bool>;

    /// Releases the backend connection. Called once, after the server drained.
    async fn close(&self) {}
}
