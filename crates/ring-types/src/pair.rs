use serde::{Deserialize, Serialize};

use crate::config::RingConfig;

/// Which ring of the pair an edit is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTarget {
    Ring1,
    Ring2,
    Pair,
}

/// The two rings of a wedding set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingPair {
    pub ring1: RingConfig,
    pub ring2: RingConfig,
}

impl RingPair {
    pub fn new() -> Self {
        Self {
            ring1: RingConfig::default_for(1),
            ring2: RingConfig::default_for(2),
        }
    }

    pub fn ring(&self, id: u32) -> Option<&RingConfig> {
        match id {
            1 => Some(&self.ring1),
            2 => Some(&self.ring2),
            _ => None,
        }
    }

    /// Apply `edit` to the rings selected by `target`.
    ///
    /// With `same_settings` set, every edit reaches both rings regardless of
    /// the target. Returns the number of rings touched.
    pub fn apply_edit<F>(&mut self, target: EditTarget, same_settings: bool, mut edit: F) -> usize
    where
        F: FnMut(&mut RingConfig),
    {
        if same_settings || target == EditTarget::Pair {
            edit(&mut self.ring1);
            edit(&mut self.ring2);
            return 2;
        }
        match target {
            EditTarget::Ring1 => edit(&mut self.ring1),
            EditTarget::Ring2 | EditTarget::Pair => edit(&mut self.ring2),
        }
        1
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RingPair {
    fn default() -> Self {
        Self::new()
    }
}
