use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use snip_xid::Xid;
use std::fmt::Display;
use std::str::FromStr;

/// A validated short id naming a URL association.
///
/// Short ids are exactly 20 characters drawn from the lowercase base32hex
/// alphabet `[0-9a-v]`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortId(String);

impl ShortId {
    pub const LEN: usize = snip_xid::ENCODED_LEN;

    /// Creates a new `ShortId` after validating the input.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Returns the short id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether `id` has the shape of a short id.
    pub fn is_valid(id: &str) -> bool {
        Self::validate(id).is_ok()
    }

    fn validate(id: &str) -> Result<(), CoreError> {
        if id.len() != Self::LEN {
            return Err(CoreError::InvalidShortId(format!(
                "length must be {}, got {}",
                Self::LEN,
                id.len()
            )));
        }

        if !id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'v')) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only characters 0-9 and a-v: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl From<Xid> for ShortId {
    fn from(id: Xid) -> Self {
        Self(id.encode())
    }
}

impl FromStr for ShortId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Debug for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortId").field(&self.0).finish()
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
