use async_trait::async_trait;
use snip_core::{Associations, ServiceError, ShortId, Store, UrlAssociation};
use snip_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// A concrete implementation of the [`Associations`] trait.
///
/// This service wraps a [`Store`] and a [`Generator`] to handle:
/// - URL validation before any store access
/// - Short id generation on create
/// - Translating zero-match store outcomes into `AssociationNotFound`
///
/// The generator is responsible for uniqueness of new ids; no collision
/// check or retry is performed. Nothing is cached between calls.
#[derive(Debug)]
pub struct AssociationService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S, G> Clone for AssociationService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<S: Store, G: Generator> AssociationService<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }

    /// Accepts any absolute URL: it must carry a scheme and parse.
    ///
    /// ASCII control characters are rejected up front. `Url::parse` would
    /// strip or escape them, but the raw string is what gets stored and later
    /// sent back as a `Location` header.
    fn validate_url(url: &str) -> Result<(), ServiceError> {
        if let Some(position) = url.find(|c: char| c.is_ascii_control()) {
            return Err(ServiceError::InvalidUrl(format!(
                "'{}': control character at byte {position}",
                url.escape_debug()
            )));
        }

        Url::parse(url)
            .map(|_| ())
            .map_err(|e| ServiceError::InvalidUrl(format!("'{url}': {e}")))
    }

    fn generate_id(&self) -> ShortId {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<S: Store, G: Generator> Associations for AssociationService<S, G> {
    async fn create(&self, target_url: &str) -> Result<UrlAssociation, ServiceError> {
        Self::validate_url(target_url)?;

        let association = UrlAssociation::new(self.generate_id(), target_url);
        self.store.insert(association.clone()).await?;

        debug!(id = %association.id, url = %association.target_url, "created association");
        Ok(association)
    }

    async fn get(&self, id: &ShortId) -> Result<UrlAssociation, ServiceError> {
        trace!(id = %id, "resolving short id");

        match self.store.find_by_id(id).await? {
            Some(association) => Ok(association),
            None => {
                trace!(id = %id, "short id not found");
                Err(ServiceError::AssociationNotFound(id.clone()))
            }
        }
    }

    async fn list(&self) -> Result<Vec<UrlAssociation>, ServiceError> {
        Ok(self.store.list_all().await?)
    }

    async fn update(&self, id: &ShortId, target_url: &str) -> Result<(), ServiceError> {
        Self::validate_url(target_url)?;

        if !self.store.update_target(id, target_url).await? {
            return Err(ServiceError::AssociationNotFound(id.clone()));
        }

        debug!(id = %id, url = %target_url, "updated association");
        Ok(())
    }

    async fn delete(&self, id: &ShortId) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id).await? {
            return Err(ServiceError::AssociationNotFound(id.clone()));
        }

        debug!(id = %id, "deleted association");
        Ok(())
    }
}
