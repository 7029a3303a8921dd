//! Combat domain: frame-aligned enable window for hit volumes.

/// Phase of a hit volume's enable window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitWindowState {
    /// Not collidable, no sequence running.
    Idle,
    /// A timed sequence is running but the volume is not yet collidable.
    Pending { enable_at: f32, disable_at: f32 },
    /// Collidable. `disable_at` is None for untimed activations.
    Active { disable_at: Option<f32> },
}

/// Timed enable/disable state machine for a hit volume.
///
/// Advanced by per-frame deltas rather than wall-clock waits, so the open and
/// close boundaries land on exact simulation frames regardless of frame-rate
/// variance. At most one timed sequence is ever pending; re-opening
/// supersedes the sequence already running.
#[derive(Debug, Clone)]
pub struct HitWindow {
    state: HitWindowState,
    elapsed: f32,
}

impl Default for HitWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl HitWindow {
    pub fn new() -> Self {
        Self {
            state: HitWindowState::Idle,
            elapsed: 0.0,
        }
    }

    /// Open immediately, with no timed close.
    pub fn open(&mut self) {
        self.state = HitWindowState::Active { disable_at: None };
    }

    /// Start a timed sequence: closed until `enable_at`, open until
    /// `disable_at`, measured in accumulated frame time from this call.
    ///
    /// Supersedes any in-flight sequence and restarts the timer from zero.
    /// Thresholds are checked on the call itself, so `enable_at <= 0.0` opens
    /// at once. Open and close may resolve on the same tick; an inverted
    /// range (`disable_at < enable_at`) is therefore never observable as open.
    /// Accepted as a degenerate timeline, not validated.
    pub fn open_timed(&mut self, enable_at: f32, disable_at: f32) {
        self.elapsed = 0.0;
        self.state = HitWindowState::Pending {
            enable_at,
            disable_at,
        };
        self.apply_thresholds();
    }

    /// Close immediately. Also discards a pending sequence.
    pub fn close(&mut self) {
        self.state = HitWindowState::Idle;
    }

    /// Close immediately and reset the timer. Used for attack cancellation.
    pub fn cancel(&mut self) {
        self.state = HitWindowState::Idle;
        self.elapsed = 0.0;
    }

    /// Advance the window by one frame delta.
    pub fn tick(&mut self, delta: f32) {
        match self.state {
            HitWindowState::Idle | HitWindowState::Active { disable_at: None } => {}
            HitWindowState::Pending { .. } | HitWindowState::Active { disable_at: Some(_) } => {
                self.elapsed += delta;
                self.apply_thresholds();
            }
        }
    }

    /// True while the volume should be collidable.
    pub fn is_open(&self) -> bool {
        matches!(self.state, HitWindowState::Active { .. })
    }

    /// Frame time accumulated by the current timed sequence.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn state(&self) -> HitWindowState {
        self.state
    }

    fn apply_thresholds(&mut self) {
        if let HitWindowState::Pending {
            enable_at,
            disable_at,
        } = self.state
        {
            if self.elapsed >= enable_at {
                self.state = HitWindowState::Active {
                    disable_at: Some(disable_at),
                };
            }
        }
        if let HitWindowState::Active {
            disable_at: Some(disable_at),
        } = self.state
        {
            if self.elapsed >= disable_at {
                self.state = HitWindowState::Idle;
            }
        }
    }
}
