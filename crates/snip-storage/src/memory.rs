use async_trait::async_trait;
use dashmap::DashMap;
use snip_core::store::{ReadStore, Result, Store};
use snip_core::{ShortId, UrlAssociation};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A stored record. The map key is the native document key; `uuid` is just
/// another field.
#[derive(Debug, Clone)]
struct Document {
    uuid: ShortId,
    url: String,
}

impl Document {
    fn into_association(self) -> UrlAssociation {
        UrlAssociation::new(self.uuid, self.url)
    }
}

/// In-memory document collection using DashMap.
///
/// Records live under generated native keys and are found by scanning the
/// `uuid` field, taking the first match. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<DashMap<u64, Document>>,
    next_key: Arc<AtomicU64>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn push(&self, association: UrlAssociation) {
        let key = self.next_key.fetch_add(1, Ordering::Relaxed);
        self.documents.insert(
            key,
            Document {
                uuid: association.id,
                url: association.target_url,
            },
        );
    }

    /// Native key of the first record whose `uuid` equals `id`.
    fn find_key(&self, id: &ShortId) -> Option<u64> {
        self.documents
            .iter()
            .find(|entry| entry.value().uuid == *id)
            .map(|entry| *entry.key())
    }
}

impl FromIterator<UrlAssociation> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = UrlAssociation>>(iter: I) -> Self {
        let store = Self::new();
        for association in iter {
            store.push(association);
        }
        store
    }
}

#[async_trait]
impl ReadStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<UrlAssociation>> {
        Ok(self
            .documents
            .iter()
            .map(|entry| entry.value().clone().into_association())
            .collect())
    }

    async fn find_by_id(&self, id: &ShortId) -> Result<Option<UrlAssociation>> {
        Ok(self
            .documents
            .iter()
            .find(|entry| entry.value().uuid == *id)
            .map(|entry| entry.value().clone().into_association()))
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn insert(&self, association: UrlAssociation) -> Result<()> {
        self.push(association);
        Ok(())
    }

    async fn delete_by_id(&self, id: &ShortId) -> Result<bool> {
        let Some(key) = self.find_key(id) else {
            return Ok(false);
        };
        // The record may already be gone if another delete won the race.
        self.documents.remove(&key);
        Ok(true)
    }

    async fn update_target(&self, id: &ShortId, target_url: &str) -> Result<bool> {
        let Some(key) = self.find_key(id) else {
            return Ok(false);
        };
        if let Some(mut document) = self.documents.get_mut(&key) {
            document.url = target_url.to_owned();
        }
        Ok(true)
    }
}
