//! Combat domain: damage payload types.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Damage type tag carried by attacks and equippable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum DamageType {
    #[default]
    Physical,
    Fire,
    Ice,
    Lightning,
    Poison,
    Arcane,
}

/// Payload dispatched to a hurt box on a successful hit.
///
/// Owned by the hit box instance. Amount and type are overwritten by damage
/// updates; direction and causer are recomputed per hit.
#[derive(Debug, Clone)]
pub struct DamageInfo {
    pub amount: i32,
    pub damage_type: DamageType,
    /// Attacker position minus target position at the moment of the hit,
    /// unnormalized.
    pub direction: Vec2,
    /// The attacking character.
    pub causer: Entity,
}

impl DamageInfo {
    pub fn new(amount: i32, damage_type: DamageType, causer: Entity) -> Self {
        Self {
            amount,
            damage_type,
            direction: Vec2::ZERO,
            causer,
        }
    }
}
