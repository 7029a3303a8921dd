//! Combat domain: attack-control and hit-outcome messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::damage::DamageInfo;

/// Sent by the attack/animation controller to arm the attacker's hit boxes
/// with the named attack definition.
#[derive(Debug)]
pub struct BeginAttackEvent {
    pub attacker: Entity,
    pub attack_id: String,
}

impl Message for BeginAttackEvent {}

/// Sent when the attack animation finishes; disarms the attacker's hit boxes.
#[derive(Debug)]
pub struct EndAttackEvent {
    pub attacker: Entity,
}

impl Message for EndAttackEvent {}

/// Sent when an attack is interrupted (stagger, death, state change);
/// cancels any in-flight hit window.
#[derive(Debug)]
pub struct CancelAttackEvent {
    pub attacker: Entity,
}

impl Message for CancelAttackEvent {}

/// A hit box payload delivered to the entity owning the contacted hurt box.
#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub info: DamageInfo,
}

impl Message for DamageEvent {}

/// Notification to the attacking character that one of its hit boxes landed.
#[derive(Debug)]
pub struct HitLandedEvent {
    pub attacker: Entity,
    pub target: Entity,
    pub info: DamageInfo,
}

impl Message for HitLandedEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
