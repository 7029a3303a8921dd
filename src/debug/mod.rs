//! Debug overlay for hit detection (dev-tools feature).
//!
//! Draws hit volume outlines colored by window state so attack timing can be
//! tuned visually. Diagnostics only; expects a gizmo-capable app (i.e.
//! DefaultPlugins), so it ships as its own plugin rather than inside
//! CombatPlugin.

use bevy::prelude::*;

use crate::combat::{HitBox, HitVolumeExtents, HitWindowState};

pub struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_hit_volumes);
    }
}

fn draw_hit_volumes(
    mut gizmos: Gizmos,
    query: Query<(&HitBox, &GlobalTransform, &HitVolumeExtents)>,
) {
    for (hitbox, transform, extents) in &query {
        let color = match hitbox.window_state() {
            HitWindowState::Idle => continue,
            HitWindowState::Pending { .. } => Color::srgba(1.0, 1.0, 0.0, 0.8),
            HitWindowState::Active { .. } => Color::srgba(1.0, 0.2, 0.2, 0.8),
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(transform.translation().truncate()),
            extents.0,
            color,
        );
    }
}
