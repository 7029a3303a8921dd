//! Combat domain: spawn helpers for hit and hurt volumes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{HitBox, HurtBox};

/// Rectangle extents of a spawned hit volume, recorded for the dev overlay.
#[derive(Component, Debug, Clone, Copy)]
pub struct HitVolumeExtents(pub Vec2);

/// Spawn a hit volume as a child of its owning character: the hit box
/// component plus a sensor collider, offset in the owner's local space.
///
/// The collider starts disabled and stays disabled until the hit window
/// opens, so a freshly spawned hit volume can never register contacts.
pub fn spawn_hit_box(
    commands: &mut Commands,
    hit_box: HitBox,
    size: Vec2,
    offset: Vec2,
    layers: CollisionLayers,
) -> Entity {
    let owner = hit_box.owner();
    let entity = commands
        .spawn((
            hit_box,
            Transform::from_xyz(offset.x, offset.y, 0.0),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            ColliderDisabled,
            HitVolumeExtents(size),
            layers,
        ))
        .id();
    commands.entity(owner).add_child(entity);
    entity
}

/// Spawn a hurt volume as a child of `owner`.
pub fn spawn_hurt_box(
    commands: &mut Commands,
    owner: Entity,
    size: Vec2,
    offset: Vec2,
    layers: CollisionLayers,
) -> Entity {
    let entity = commands
        .spawn((
            HurtBox { owner },
            Transform::from_xyz(offset.x, offset.y, 0.0),
            Collider::rectangle(size.x, size.y),
            Sensor,
            layers,
        ))
        .id();
    commands.entity(owner).add_child(entity);
    entity
}
