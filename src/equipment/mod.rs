//! Equipment domain: the narrow slot query consumed by hit boxes.
//!
//! Inventory management proper lives outside this crate. Hit detection only
//! ever asks one question: what sits in this named slot, and does it carry a
//! damage type.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::combat::DamageType;
use crate::content::ContentRegistry;


/// Named equipment slots for a character (`"main_hand"`, `"off_hand"`, ...),
/// each holding the id of an item definition.
#[derive(Component, Debug, Default, Clone)]
pub struct Equipment {
    slots: HashMap<String, String>,
}

impl Equipment {
    /// Put the item with `item_id` in `slot`, replacing whatever was there.
    pub fn equip(&mut self, slot: impl Into<String>, item_id: impl Into<String>) {
        self.slots.insert(slot.into(), item_id.into());
    }

    /// Empty `slot`, returning the id of the item that was equipped.
    pub fn unequip(&mut self, slot: &str) -> Option<String> {
        self.slots.remove(slot)
    }

    /// Id of the item currently in `slot`.
    pub fn item_in_slot(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }
}

/// Damage type carried by the item equipped in `slot`, if any.
///
/// Queried fresh at every arm and damage update, never cached across
/// equipment changes.
pub fn damage_type_override(
    equipment: &Equipment,
    registry: &ContentRegistry,
    slot: &str,
) -> Option<DamageType> {
    let item_id = equipment.item_in_slot(slot)?;
    registry.items.get(item_id)?.damage_type
}
