//! Content domain: registry resource providing id lookups for loaded content.

use std::collections::HashMap;

use bevy::prelude::*;

use super::data::{AttackDef, ItemDef};

/// Central registry for all loaded content. O(1) lookup by id.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub items: HashMap<String, ItemDef>,
    pub attacks: HashMap<String, AttackDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Items: {}\n\
             - Attacks: {}",
            self.items.len(),
            self.attacks.len()
        )
    }

    /// Returns total count of all loaded items.
    pub fn total_count(&self) -> usize {
        self.items.len() + self.attacks.len()
    }
}
