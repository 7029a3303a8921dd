//! Combat domain: frame-stepped systems for hit windows, contact resolution,
//! and damage application.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    Health, HitBox, HitStreak, HurtBox, Invulnerable, MisconfiguredHitBox,
};
use crate::combat::events::{
    BeginAttackEvent, CancelAttackEvent, DamageEvent, DeathEvent, EndAttackEvent, HitLandedEvent,
};
use crate::combat::resources::CombatTuning;
use crate::content::ContentRegistry;
use crate::equipment::{self, Equipment};

/// Configuration check: a hit box is useless without a collider on the same
/// entity. Reported once; the entity is marked inert rather than taking down
/// the frame loop.
pub(crate) fn detect_missing_colliders(
    mut commands: Commands,
    query: Query<(Entity, Option<&Collider>), Added<HitBox>>,
) {
    for (entity, collider) in &query {
        if collider.is_none() {
            error!(
                "HitBox on {:?} has no Collider on the same entity; it will never go live",
                entity
            );
            commands.entity(entity).insert(MisconfiguredHitBox);
        }
    }
}

/// Initial damage-type resolution for freshly spawned hit boxes, so the
/// cached payload honors the weapon slot before the first arm.
pub(crate) fn resolve_spawned_hit_boxes(
    registry: Option<Res<ContentRegistry>>,
    equipment_query: Query<&Equipment>,
    mut hitbox_query: Query<&mut HitBox, Added<HitBox>>,
) {
    let Some(registry) = registry else {
        return;
    };

    for mut hitbox in &mut hitbox_query {
        let Some(override_type) = hitbox.weapon_slot().and_then(|slot| {
            let equipped = equipment_query.get(hitbox.owner()).ok()?;
            equipment::damage_type_override(equipped, &registry, slot)
        }) else {
            continue;
        };

        let (amount, base_type) = {
            let info = hitbox.damage_info();
            (info.amount, info.damage_type)
        };
        hitbox.update_damage(amount, base_type, Some(override_type));
    }
}

/// Arm the attacker's hit boxes from a named attack definition, re-resolving
/// the weapon-slot damage-type override at this moment so it can never go
/// stale across equipment changes.
pub(crate) fn begin_attacks(
    mut begin_events: MessageReader<BeginAttackEvent>,
    registry: Option<Res<ContentRegistry>>,
    equipment_query: Query<&Equipment>,
    mut hitbox_query: Query<&mut HitBox, Without<MisconfiguredHitBox>>,
) {
    let Some(registry) = registry else {
        return;
    };

    for event in begin_events.read() {
        let Some(attack) = registry.attacks.get(&event.attack_id) else {
            warn!("Attack '{}' not found in registry", event.attack_id);
            continue;
        };

        for mut hitbox in &mut hitbox_query {
            if hitbox.owner() != event.attacker {
                continue;
            }

            let override_type = hitbox.weapon_slot().and_then(|slot| {
                let equipped = equipment_query.get(event.attacker).ok()?;
                equipment::damage_type_override(equipped, &registry, slot)
            });
            hitbox.update_damage(attack.damage, attack.damage_type, override_type);

            match attack.window {
                Some(window) => hitbox.arm_timed(window.enable_time, window.disable_time),
                None => hitbox.arm(),
            }

            debug!(
                "Armed hit box of {:?} with '{}' ({} {:?} damage)",
                event.attacker,
                attack.id,
                attack.damage,
                hitbox.damage_info().damage_type
            );
        }
    }
}

/// Disarm at the end of the attack animation.
pub(crate) fn end_attacks(
    mut end_events: MessageReader<EndAttackEvent>,
    mut hitbox_query: Query<&mut HitBox, Without<MisconfiguredHitBox>>,
) {
    for event in end_events.read() {
        for mut hitbox in &mut hitbox_query {
            if hitbox.owner() == event.attacker {
                hitbox.disarm();
            }
        }
    }
}

/// Attack cancellation: cut any in-flight window without waiting for its
/// disable threshold.
pub(crate) fn cancel_attacks(
    mut cancel_events: MessageReader<CancelAttackEvent>,
    mut hitbox_query: Query<&mut HitBox, Without<MisconfiguredHitBox>>,
) {
    for event in cancel_events.read() {
        for mut hitbox in &mut hitbox_query {
            if hitbox.owner() == event.attacker {
                hitbox.force_stop();
            }
        }
    }
}

/// Advance every hit window by the frame delta.
pub(crate) fn tick_hit_windows(
    time: Res<Time>,
    mut query: Query<&mut HitBox, Without<MisconfiguredHitBox>>,
) {
    let delta = time.delta_secs();
    for mut hitbox in &mut query {
        hitbox.tick(delta);
    }
}

/// Mirror window state onto the physics collider. The collider's enabled
/// flag is the only externally observable side effect besides damage
/// dispatch.
pub(crate) fn sync_hit_box_colliders(
    mut commands: Commands,
    query: Query<(Entity, &HitBox, Option<&ColliderDisabled>), Without<MisconfiguredHitBox>>,
) {
    for (entity, hitbox, disabled) in &query {
        if hitbox.is_live() && disabled.is_some() {
            commands.entity(entity).remove::<ColliderDisabled>();
        } else if !hitbox.is_live() && disabled.is_none() {
            commands.entity(entity).insert(ColliderDisabled);
        }
    }
}

/// Route contact-begin notifications to the hit boxes involved.
///
/// A contact with no hurt box, a repeat contact within one activation, or a
/// self-contact is a normal filtered outcome, not an error. The gate also
/// re-checks that the window is still open, so a contact event that raced a
/// closing window is ignored.
pub(crate) fn resolve_hit_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut hit_landed_events: MessageWriter<HitLandedEvent>,
    mut hitbox_query: Query<(&mut HitBox, &GlobalTransform), Without<MisconfiguredHitBox>>,
    hurtbox_query: Query<(&HurtBox, &GlobalTransform)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hitbox_entity, other_entity) in pairs {
            let Ok((mut hitbox, hitbox_transform)) = hitbox_query.get_mut(hitbox_entity) else {
                continue;
            };
            let Ok((hurtbox, hurtbox_transform)) = hurtbox_query.get(other_entity) else {
                continue;
            };

            let Some(info) = hitbox.register_contact(
                hurtbox.owner,
                hitbox_transform.translation().truncate(),
                hurtbox_transform.translation().truncate(),
            ) else {
                continue;
            };

            debug!(
                "Hit box of {:?} struck {:?} for {} {:?} damage",
                info.causer, hurtbox.owner, info.amount, info.damage_type
            );

            damage_events.write(DamageEvent {
                target: hurtbox.owner,
                info: info.clone(),
            });
            hit_landed_events.write(HitLandedEvent {
                attacker: hitbox.owner(),
                target: hurtbox.owner,
                info,
            });
        }
    }
}

/// Damage acceptance on the receiving side. Honors i-frames when the target
/// carries them, refreshing the window on each accepted hit.
pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    tuning: Res<CombatTuning>,
    mut query: Query<(&mut Health, Option<&mut Invulnerable>)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, invulnerable)) = query.get_mut(event.target) else {
            continue;
        };

        if let Some(mut invulnerable) = invulnerable {
            if invulnerable.is_invulnerable() {
                continue;
            }
            invulnerable.timer = tuning.iframes_duration;
        }

        let dealt = health.take_damage(event.info.amount);
        debug!(
            "{:?} took {} {:?} damage from {:?} ({}/{} hp left)",
            event.target,
            dealt,
            event.info.damage_type,
            event.info.causer,
            health.current,
            health.max
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// The owning character's hit-enemy hook: bump the attacker's streak counter.
pub(crate) fn track_hit_streaks(
    mut hit_events: MessageReader<HitLandedEvent>,
    tuning: Res<CombatTuning>,
    mut query: Query<&mut HitStreak>,
) {
    for event in hit_events.read() {
        if let Ok(mut streak) = query.get_mut(event.attacker) {
            streak.count += 1;
            streak.window_timer = tuning.streak_window;
        }
    }
}

/// Decay per-entity combat timers.
pub(crate) fn decay_combat_timers(
    time: Res<Time>,
    mut invulnerable_query: Query<&mut Invulnerable>,
    mut streak_query: Query<&mut HitStreak>,
) {
    let delta = time.delta_secs();

    for mut invulnerable in &mut invulnerable_query {
        if invulnerable.timer > 0.0 {
            invulnerable.timer -= delta;
        }
    }

    for mut streak in &mut streak_query {
        if streak.window_timer > 0.0 {
            streak.window_timer -= delta;
            if streak.window_timer <= 0.0 {
                streak.count = 0;
            }
        }
    }
}
