use crate::association::UrlAssociation;
use crate::short_id::ShortId;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ServiceError>;

/// Lifecycle operations on URL associations.
#[async_trait]
pub trait Associations: Send + Sync + 'static {
    /// Validates `target_url`, mints a new short id and persists the pair.
    async fn create(&self, target_url: &str) -> Result<UrlAssociation>;

    /// Looks up the association for `id`.
    async fn get(&self, id: &ShortId) -> Result<UrlAssociation>;

    /// Returns all associations.
    async fn list(&self) -> Result<Vec<UrlAssociation>>;

    /// Points `id` at a new target URL. The id itself never changes.
    async fn update(&self, id: &ShortId, target_url: &str) -> Result<()>;

    /// Removes the association for `id`.
    async fn delete(&self, id: &ShortId) -> Result<()>;
}
