use serde::{Deserialize, Serialize};

use ascent_core::timer::EffectTimer;

/// Run-scoped character state: lives, timed effects, fart charges and score.
///
/// Fields are private; the engine and item pickups change them only through
/// the methods below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterEffects {
    lives: u32,
    shield: EffectTimer,
    high_jump: EffectTimer,
    farts: u32,
    farting: bool,
    score: u64,
    signets: u32,
}

impl CharacterEffects {
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            ..Self::default()
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn add_life(&mut self) {
        self.lives += 1;
    }

    pub fn subtract_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn shield_remaining(&self) -> f32 {
        self.shield.remaining
    }

    pub fn is_shielded(&self) -> bool {
        self.shield.is_active()
    }

    pub fn set_shield(&mut self, duration: f32) {
        self.shield.set(duration);
    }

    pub fn high_jump_remaining(&self) -> f32 {
        self.high_jump.remaining
    }

    pub fn is_high_jump(&self) -> bool {
        self.high_jump.is_active()
    }

    pub fn set_high_jump(&mut self, duration: f32) {
        self.high_jump.set(duration);
    }

    pub fn farts(&self) -> u32 {
        self.farts
    }

    pub fn set_farts(&mut self, farts: u32) {
        self.farts = farts;
    }

    pub fn is_farting(&self) -> bool {
        self.farting
    }

    /// Enter the farting sub-mode. Fails without charges or when already farting.
    pub fn start_farting(&mut self) -> bool {
        if self.farting || self.farts == 0 {
            return false;
        }
        self.farting = true;
        true
    }

    /// Spend a charge on the discharge and leave the farting sub-mode.
    pub fn subtract_fart(&mut self) {
        self.farts = self.farts.saturating_sub(1);
        self.farting = false;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += u64::from(points);
    }

    pub fn signets(&self) -> u32 {
        self.signets
    }

    /// Count a signet and return the new total.
    pub fn add_signet(&mut self) -> u32 {
        self.signets += 1;
        self.signets
    }

    /// Advance effect timers.
    pub fn update(&mut self, dt: f32) {
        self.shield.tick(dt);
        self.high_jump.tick(dt);
    }
}
