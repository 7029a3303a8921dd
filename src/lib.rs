//! Hit detection and damage resolution for 2D platformer combat.
//!
//! Two cooperating pieces: a frame-aligned hit window that arms and disarms a
//! damage-causing sensor collider on a timed sequence, and a contact resolver
//! that turns collision notifications into at most one damage dispatch per
//! activation, applying equipment-driven damage-type overrides along the way.
//!
//! Add [`CombatPlugin`] and [`ContentPlugin`] next to your physics plugins,
//! spawn hit and hurt volumes with [`combat::spawn_hit_box`] and
//! [`combat::spawn_hurt_box`], and drive attacks through
//! [`combat::BeginAttackEvent`] / [`combat::EndAttackEvent`] /
//! [`combat::CancelAttackEvent`] messages.

pub mod combat;
pub mod content;
pub mod equipment;

#[cfg(feature = "dev-tools")]
pub mod debug;

pub use combat::CombatPlugin;
pub use content::ContentPlugin;
