use serde::{Deserialize, Serialize};

/// Countdown for a timed effect. Active while `remaining > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectTimer {
    pub remaining: f32,
}

impl EffectTimer {
    pub const fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Restart the countdown. Negative durations clear the effect.
    pub fn set(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}
