//! Combat domain: hit window control, contact resolution, and damage
//! application. Plugin wiring and public exports.

mod components;
mod damage;
mod events;
mod resources;
mod spawn;
mod systems;
mod window;

#[cfg(test)]
mod tests;

pub use components::{
    GameLayer, Health, HitBox, HitStreak, HurtBox, Invulnerable, MisconfiguredHitBox,
};
pub use damage::{DamageInfo, DamageType};
pub use events::{
    BeginAttackEvent, CancelAttackEvent, DamageEvent, DeathEvent, EndAttackEvent, HitLandedEvent,
};
pub use resources::CombatTuning;
pub use spawn::{HitVolumeExtents, spawn_hit_box, spawn_hurt_box};
pub use window::{HitWindow, HitWindowState};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, begin_attacks, cancel_attacks, decay_combat_timers, detect_missing_colliders,
    end_attacks, resolve_hit_contacts, resolve_spawned_hit_boxes, sync_hit_box_colliders,
    tick_hit_windows, track_hit_streaks,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .add_message::<BeginAttackEvent>()
            .add_message::<EndAttackEvent>()
            .add_message::<CancelAttackEvent>()
            .add_message::<DamageEvent>()
            .add_message::<HitLandedEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    detect_missing_colliders,
                    resolve_spawned_hit_boxes,
                    begin_attacks,
                    end_attacks,
                    cancel_attacks,
                    tick_hit_windows,
                    sync_hit_box_colliders,
                    resolve_hit_contacts,
                    apply_damage,
                    track_hit_streaks,
                    decay_combat_timers,
                )
                    .chain(),
            );
    }
}
