use crate::short_id::ShortId;
use serde::{Deserialize, Serialize};

/// A persisted pairing of a short id and the URL it redirects to.
///
/// Serialized as `{"uuid": "<short id>", "url": "<target url>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAssociation {
    /// Generated at creation and never changed afterwards.
    #[serde(rename = "uuid")]
    pub id: ShortId,
    /// The real URL behind the short id. The only mutable field.
    #[serde(rename = "url")]
    pub target_url: String,
}

impl UrlAssociation {
    pub fn new(id: ShortId, target_url: impl Into<String>) -> Self {
        Self {
            id,
            target_url: target_url.into(),
        }
    }
}
