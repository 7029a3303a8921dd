//! Combat domain: hit/hurt volume components and receiving-side state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::damage::{DamageInfo, DamageType};
use crate::combat::window::{HitWindow, HitWindowState};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player characters
    Player,
    /// Enemy characters
    Enemy,
    /// Player hit volumes (damage enemies)
    PlayerHitbox,
    /// Enemy hit volumes (damage the player)
    EnemyHitbox,
}

/// The damage-causing collider of a character or enemy; collides with hurt
/// boxes to cause damage.
///
/// Must live on the same entity as a sensor `Collider`; the window decides
/// whether that collider is enabled. At most one hit lands per activation:
/// the latch set by [`HitBox::register_contact`] stays set until the next
/// `arm`/`arm_timed`/`disarm`, so a hit volume overlapping a hurt volume
/// across several physics steps still deals damage once.
#[derive(Component, Debug)]
pub struct HitBox {
    owner: Entity,
    weapon_slot: Option<String>,
    window: HitWindow,
    has_hit: bool,
    damage: DamageInfo,
}

impl HitBox {
    pub fn new(owner: Entity, amount: i32, damage_type: DamageType) -> Self {
        Self {
            owner,
            weapon_slot: None,
            window: HitWindow::new(),
            has_hit: false,
            damage: DamageInfo::new(amount, damage_type, owner),
        }
    }

    /// Route damage-type resolution through the item equipped in `slot`,
    /// overriding the attack's own type whenever that item carries one.
    pub fn with_weapon_slot(mut self, slot: impl Into<String>) -> Self {
        self.weapon_slot = Some(slot.into());
        self
    }

    /// The character this hit box belongs to.
    pub fn owner(&self) -> Entity {
        self.owner
    }

    pub fn weapon_slot(&self) -> Option<&str> {
        self.weapon_slot.as_deref()
    }

    /// True if the hit box has hit something since it was last armed.
    pub fn has_hit(&self) -> bool {
        self.has_hit
    }

    /// True while the volume can register contacts.
    pub fn is_live(&self) -> bool {
        self.window.is_open()
    }

    pub fn window_state(&self) -> HitWindowState {
        self.window.state()
    }

    pub fn elapsed(&self) -> f32 {
        self.window.elapsed()
    }

    pub fn damage_info(&self) -> &DamageInfo {
        &self.damage
    }

    /// Arm with no timer.
    pub fn arm(&mut self) {
        self.has_hit = false;
        self.window.open();
    }

    /// Arm on a timed window: live once accumulated frame time reaches
    /// `enable_at`, dead again at `disable_at`. Restarts any sequence that is
    /// already running.
    pub fn arm_timed(&mut self, enable_at: f32, disable_at: f32) {
        self.has_hit = false;
        self.window.open_timed(enable_at, disable_at);
    }

    /// Disarm immediately, discarding a pending timed sequence.
    pub fn disarm(&mut self) {
        self.has_hit = false;
        self.window.close();
    }

    /// Force the attack to finish. Leaves the hit latch untouched so the
    /// owning attack can still query [`HitBox::has_hit`].
    pub fn force_stop(&mut self) {
        self.window.cancel();
    }

    /// Overwrite the cached damage amount and type. `override_type`, when the
    /// caller resolved one from the weapon slot, supersedes `damage_type`.
    /// Never resets the hit latch.
    pub fn update_damage(
        &mut self,
        amount: i32,
        damage_type: DamageType,
        override_type: Option<DamageType>,
    ) {
        self.damage.amount = amount;
        self.damage.damage_type = override_type.unwrap_or(damage_type);
    }

    /// Gate a contact with a hurt box owned by `target_owner`.
    ///
    /// Returns the payload to dispatch on the first valid contact of the
    /// current activation. Later contacts, self-contacts, and contacts while
    /// the window is closed return None with no side effects; a miss is a
    /// normal outcome, not an error.
    pub fn register_contact(
        &mut self,
        target_owner: Entity,
        self_pos: Vec2,
        other_pos: Vec2,
    ) -> Option<DamageInfo> {
        if !self.window.is_open() || self.has_hit || target_owner == self.owner {
            return None;
        }
        self.damage.direction = self_pos - other_pos;
        self.damage.causer = self.owner;
        self.has_hit = true;
        Some(self.damage.clone())
    }

    pub(crate) fn tick(&mut self, delta: f32) {
        self.window.tick(delta);
    }
}

/// The receiving-side volume; anything reachable through one can be damaged.
#[derive(Component, Debug)]
pub struct HurtBox {
    /// The mob this hurt box belongs to.
    pub owner: Entity,
}

/// Health for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Invulnerability frames - entity cannot take damage
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Counts consecutive landed hits for an attacking character. Refreshed on
/// every hit-landed notification, reset when the window between hits expires.
#[derive(Component, Debug, Default)]
pub struct HitStreak {
    pub count: u32,
    pub window_timer: f32,
}

/// Marks a hit box that failed its configuration check (no collider on the
/// same entity). The hit box stays inert instead of crashing the frame loop.
#[derive(Component, Debug)]
pub struct MisconfiguredHitBox;
