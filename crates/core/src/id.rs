//! Item identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier of an item: a positive integer issued by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first id a fresh store hands out.
    pub const FIRST: ItemId = ItemId(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = StoreError;

    /// Accepts positive decimal integers only; anything else (`"abc"`, `"0"`,
    /// `"-3"`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) => Err(StoreError::validation("ItemId: must be positive")),
            Ok(raw) => Ok(Self(raw)),
            Err(e) => Err(StoreError::validation(format!("ItemId: {e}"))),
        }
    }
}
