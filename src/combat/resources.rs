//! Combat domain: tuning resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Invulnerability window granted to a target after an accepted hit.
    pub iframes_duration: f32,
    /// How long a hit streak survives without another landed hit.
    pub streak_window: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            iframes_duration: 0.5,
            streak_window: 2.0,
        }
    }
}
