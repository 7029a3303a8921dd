//! Combat domain: unit tests for the hit window, the contact gate, and the
//! attack-controller glue.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{BeginAttackEvent, DamageType, Health, HitBox, HitWindow, HitWindowState};
use crate::content::{AttackDef, AttackWindowDef, ContentRegistry, ItemDef};
use crate::equipment::Equipment;

fn attacker_and_target() -> (World, Entity, Entity) {
    let mut world = World::new();
    let attacker = world.spawn_empty().id();
    let target = world.spawn_empty().id();
    (world, attacker, target)
}

#[test]
fn timed_window_aligns_to_frame_boundaries() {
    let mut window = HitWindow::new();
    window.open_timed(0.2, 0.5);
    assert!(!window.is_open());

    window.tick(0.1);
    assert!(!window.is_open());
    window.tick(0.1);
    // Accumulated frame time reaches 0.2 on the 2nd tick
    assert!(window.is_open());

    window.tick(0.1);
    window.tick(0.1);
    assert!(window.is_open());
    window.tick(0.1);
    // ...and 0.5 on the 5th
    assert!(!window.is_open());
    assert_eq!(window.state(), HitWindowState::Idle);
}

#[test]
fn reopening_supersedes_running_sequence() {
    let mut window = HitWindow::new();
    window.open_timed(0.1, 0.3);
    window.tick(0.1);
    assert!(window.is_open());

    window.open_timed(0.1, 0.3);
    assert!(!window.is_open());
    assert_eq!(window.elapsed(), 0.0);
}

#[test]
fn zero_enable_time_opens_on_the_call() {
    let mut window = HitWindow::new();
    window.open_timed(0.0, 0.3);
    assert!(window.is_open());
}

#[test]
fn inverted_range_is_never_observable_as_open() {
    let mut window = HitWindow::new();
    window.open_timed(0.2, 0.1);
    for _ in 0..10 {
        window.tick(0.1);
        assert!(!window.is_open());
    }
    assert_eq!(window.state(), HitWindowState::Idle);
}

#[test]
fn cancel_closes_and_resets_timer() {
    let mut window = HitWindow::new();
    window.open_timed(0.2, 0.5);
    window.tick(0.1);
    window.cancel();
    assert!(!window.is_open());
    assert_eq!(window.elapsed(), 0.0);
    assert_eq!(window.state(), HitWindowState::Idle);
}

#[test]
fn untimed_open_stays_open_until_closed() {
    let mut window = HitWindow::new();
    window.open();
    window.tick(5.0);
    assert!(window.is_open());
    window.close();
    assert!(!window.is_open());
}

#[test]
fn one_hit_per_activation() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm();
    assert!(
        hitbox
            .register_contact(target, Vec2::ZERO, Vec2::ONE)
            .is_some()
    );
    assert!(hitbox.has_hit());
    assert!(
        hitbox
            .register_contact(target, Vec2::ZERO, Vec2::ONE)
            .is_none()
    );

    // The latch is reset only by the next activation
    hitbox.arm();
    assert!(!hitbox.has_hit());
    assert!(
        hitbox
            .register_contact(target, Vec2::ZERO, Vec2::ONE)
            .is_some()
    );
}

#[test]
fn self_contact_is_filtered() {
    let (_world, attacker, _target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm();
    assert!(
        hitbox
            .register_contact(attacker, Vec2::ZERO, Vec2::ONE)
            .is_none()
    );
    assert!(!hitbox.has_hit());
}

#[test]
fn closed_window_filters_contacts() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    assert!(
        hitbox
            .register_contact(target, Vec2::ZERO, Vec2::ONE)
            .is_none()
    );
}

#[test]
fn force_stop_mid_sequence_makes_contacts_noops() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm_timed(0.2, 0.5);
    hitbox.tick(0.1);
    hitbox.tick(0.1);
    assert!(hitbox.is_live());

    hitbox.force_stop();
    assert!(!hitbox.is_live());
    assert_eq!(hitbox.elapsed(), 0.0);
    assert!(
        hitbox
            .register_contact(target, Vec2::ZERO, Vec2::ONE)
            .is_none()
    );
}

#[test]
fn force_stop_keeps_the_hit_latch() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm();
    hitbox.register_contact(target, Vec2::ZERO, Vec2::ONE);
    hitbox.force_stop();
    assert!(hitbox.has_hit());

    hitbox.arm();
    assert!(!hitbox.has_hit());
}

#[test]
fn payload_carries_direction_and_causer() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm();
    let info = hitbox
        .register_contact(target, Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0))
        .unwrap();
    // Attacker-minus-target, unnormalized
    assert_eq!(info.direction, Vec2::new(-3.0, -4.0));
    assert_eq!(info.causer, attacker);
    assert_eq!(info.amount, 10);
    assert_eq!(info.damage_type, DamageType::Physical);
}

#[test]
fn disarm_is_idempotent() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm();
    hitbox.register_contact(target, Vec2::ZERO, Vec2::ONE);

    hitbox.disarm();
    assert!(!hitbox.is_live());
    assert!(!hitbox.has_hit());
    hitbox.disarm();
    assert!(!hitbox.is_live());
    assert!(!hitbox.has_hit());
}

#[test]
fn update_damage_applies_override_and_keeps_latch() {
    let (_world, attacker, target) = attacker_and_target();
    let mut hitbox = HitBox::new(attacker, 10, DamageType::Physical);

    hitbox.arm();
    hitbox.register_contact(target, Vec2::ZERO, Vec2::ONE);

    hitbox.update_damage(25, DamageType::Physical, Some(DamageType::Fire));
    assert!(hitbox.has_hit());
    assert_eq!(hitbox.damage_info().amount, 25);
    assert_eq!(hitbox.damage_info().damage_type, DamageType::Fire);

    // Without an override the passed-in type is kept as given
    hitbox.update_damage(25, DamageType::Physical, None);
    assert_eq!(hitbox.damage_info().damage_type, DamageType::Physical);
}

#[test]
fn health_floors_at_zero_and_reports_death() {
    let mut health = Health::new(30);
    assert_eq!(health.take_damage(10), 10);
    assert_eq!(health.current, 20);
    assert!(!health.is_dead());

    assert_eq!(health.take_damage(50), 20);
    assert_eq!(health.current, 0);
    assert!(health.is_dead());

    assert_eq!(health.heal(5), 5);
    assert!(!health.is_dead());
}

#[test]
fn begin_attack_arms_hit_boxes_with_weapon_override() {
    let mut app = App::new();
    app.add_message::<BeginAttackEvent>()
        .add_systems(Update, super::systems::begin_attacks);

    let mut registry = ContentRegistry::default();
    registry.attacks.insert(
        "attack_slash".to_string(),
        AttackDef {
            id: "attack_slash".to_string(),
            name: "Slash".to_string(),
            damage: 10,
            damage_type: DamageType::Physical,
            window: Some(AttackWindowDef {
                enable_time: 0.2,
                disable_time: 0.5,
            }),
        },
    );
    registry.items.insert(
        "item_flame_sword".to_string(),
        ItemDef {
            id: "item_flame_sword".to_string(),
            name: "Flame Sword".to_string(),
            slot: "main_hand".to_string(),
            damage_type: Some(DamageType::Fire),
        },
    );
    app.insert_resource(registry);

    let mut equipment = Equipment::default();
    equipment.equip("main_hand", "item_flame_sword");
    let attacker = app.world_mut().spawn(equipment).id();
    let hitbox_entity = app
        .world_mut()
        .spawn(HitBox::new(attacker, 1, DamageType::Physical).with_weapon_slot("main_hand"))
        .id();

    app.world_mut()
        .resource_mut::<Messages<BeginAttackEvent>>()
        .write(BeginAttackEvent {
            attacker,
            attack_id: "attack_slash".to_string(),
        });
    app.update();

    let hitbox = app.world().get::<HitBox>(hitbox_entity).unwrap();
    // Armed but still pending its enable threshold
    assert!(!hitbox.is_live());
    assert!(matches!(
        hitbox.window_state(),
        HitWindowState::Pending { .. }
    ));
    assert_eq!(hitbox.damage_info().amount, 10);
    assert_eq!(hitbox.damage_info().damage_type, DamageType::Fire);
}
