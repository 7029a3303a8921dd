//! Content domain: data definitions mirroring assets/data/*.ron.
//!
//! These structs are deserialized at startup; the ContentRegistry provides
//! lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::DamageType;

/// Common wrapper for RON files with schema_version and items.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// An equippable item (items.ron). Carries only the fields hit detection
/// consumes: the slot it occupies and the damage type it imposes, if any.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    /// Equipment slot this item occupies (e.g. "main_hand")
    pub slot: String,
    /// When present, overrides the damage type of attacks routed through the
    /// weapon slot this item sits in.
    pub damage_type: Option<DamageType>,
}

/// An attack definition (attacks.ron): the base damage payload plus the
/// timed enable window for its hit volume.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AttackDef {
    pub id: String,
    pub name: String,
    pub damage: i32,
    pub damage_type: DamageType,
    /// None arms the hit volume immediately; the controller disarms it when
    /// the animation ends.
    pub window: Option<AttackWindowDef>,
}

/// Frame-time thresholds for a timed hit window, relative to attack start.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
pub struct AttackWindowDef {
    pub enable_time: f32,
    pub disable_time: f32,
}
