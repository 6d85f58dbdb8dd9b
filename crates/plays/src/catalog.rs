//! Catalog: play id → play.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult, PlayId};

use crate::play::Play;

/// Immutable mapping from play id to play record.
///
/// Deserializes from a plain JSON object keyed by play id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. A later entry for the same id replaces the earlier one.
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.plays.insert(id.into(), play);
        self
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Look up a play, failing with `UnknownPlay` if the id is absent.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.get(id).ok_or_else(|| BillingError::unknown_play(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<PlayId>> FromIterator<(K, Play)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (K, Play)>>(iter: T) -> Self {
        Self {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}
