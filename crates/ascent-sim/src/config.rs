use serde::{Deserialize, Serialize};

use ascent_core::level::JumpBoostPower;

/// Gravity acceleration (units/s^2, pulls speed.y down).
pub const GRAVITY: f32 = 900.0;
/// Launch speed of a normal jump.
pub const JUMP_SPEED: f32 = 600.0;
/// Launch speed multiplier while the high-jump effect is active.
pub const HIGH_JUMP_MULTIPLIER: f32 = 1.3;
/// Launch speed multiplier of a fart discharge.
pub const FART_MULTIPLIER: f32 = 1.3;
/// Shield granted after losing a life.
pub const DEATH_SHIELD_DURATION: f32 = 3.0;
/// Fart charges granted when recovering from a fall.
pub const FALL_RECOVERY_FARTS: u32 = 1;
/// Score per signet, multiplied by the number of signets held.
pub const SIGNET_SCORE_INCREMENT: u32 = 100;

/// Character motion parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_speed: f32,
    /// Terminal downward speed.
    pub max_fall_speed: f32,
    pub high_jump_multiplier: f32,
    pub fart_multiplier: f32,
    pub jump_boost_low_multiplier: f32,
    pub jump_boost_medium_multiplier: f32,
    pub jump_boost_high_multiplier: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            max_fall_speed: JUMP_SPEED,
            high_jump_multiplier: HIGH_JUMP_MULTIPLIER,
            fart_multiplier: FART_MULTIPLIER,
            jump_boost_low_multiplier: 1.5,
            jump_boost_medium_multiplier: 2.0,
            jump_boost_high_multiplier: 2.6,
        }
    }
}

impl PhysicsConfig {
    pub fn high_jump_speed(&self) -> f32 {
        self.jump_speed * self.high_jump_multiplier
    }

    pub fn fart_speed(&self) -> f32 {
        self.jump_speed * self.fart_multiplier
    }

    pub fn jump_boost_speed(&self, power: JumpBoostPower) -> f32 {
        let multiplier = match power {
            JumpBoostPower::Low => self.jump_boost_low_multiplier,
            JumpBoostPower::Medium => self.jump_boost_medium_multiplier,
            JumpBoostPower::High => self.jump_boost_high_multiplier,
        };
        self.jump_speed * multiplier
    }
}

/// Lives, shields and item tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub starting_lives: u32,
    pub death_shield_duration: f32,
    pub fall_recovery_farts: u32,
    pub signet_score_increment: u32,
    pub shield_item_duration: f32,
    pub high_jump_item_duration: f32,
    pub fart_refill_charges: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            death_shield_duration: DEATH_SHIELD_DURATION,
            fall_recovery_farts: FALL_RECOVERY_FARTS,
            signet_score_increment: SIGNET_SCORE_INCREMENT,
            shield_item_duration: 15.0,
            high_jump_item_duration: 10.0,
            fart_refill_charges: 3,
        }
    }
}

/// Platform behavior tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Extra distance around the visible window where platforms stay active.
    pub active_padding: f32,
    /// Glide speed of reposition platforms switching sides.
    pub reposition_speed: f32,
    /// How long visible-on-jump platforms stay solid after a reveal.
    pub visible_on_jump_duration: f32,
    /// Delay between landing on a crumble platform and its collapse.
    pub crumble_delay: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            active_padding: 100.0,
            reposition_speed: 600.0,
            visible_on_jump_duration: 1.5,
            crumble_delay: 0.25,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub effects: EffectsConfig,
    pub world: WorldConfig,
}

impl SimConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("ASCENT_SIM_CONFIG")
            .unwrap_or_else(|_| "config/sim.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                SimConfig::default()
            }),
            Err(_) => SimConfig::default(),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.physics.gravity, GRAVITY);
        assert_eq!(cfg.physics.jump_speed, JUMP_SPEED);
        assert_eq!(cfg.effects.death_shield_duration, 3.0);
        assert_eq!(cfg.effects.fall_recovery_farts, 1);
        assert_eq!(cfg.effects.signet_score_increment, 100);
        assert_eq!(cfg.effects.shield_item_duration, 15.0);
    }

    #[test]
    fn derived_speeds() {
        let physics = PhysicsConfig::default();
        assert!((physics.high_jump_speed() - 780.0).abs() < 1e-3);
        assert!((physics.fart_speed() - 780.0).abs() < 1e-3);
        assert!(
            physics.jump_boost_speed(JumpBoostPower::Low)
                < physics.jump_boost_speed(JumpBoostPower::Medium)
        );
        assert!(
            physics.jump_boost_speed(JumpBoostPower::Medium)
                < physics.jump_boost_speed(JumpBoostPower::High)
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = SimConfig::from_toml(
            r#"
            [physics]
            gravity = 1200.0

            [effects]
            starting_lives = 5
            "#,
        )
        .expect("valid toml");
        assert_eq!(cfg.physics.gravity, 1200.0);
        assert_eq!(cfg.physics.jump_speed, JUMP_SPEED);
        assert_eq!(cfg.effects.starting_lives, 5);
        assert_eq!(cfg.world.crumble_delay, WorldConfig::default().crumble_delay);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let cfg = SimConfig::from_toml(include_str!("../../../config/sim.toml"))
            .expect("shipped config parses");
        let defaults = SimConfig::default();
        assert_eq!(cfg.physics.jump_speed, defaults.physics.jump_speed);
        assert_eq!(cfg.effects.starting_lives, defaults.effects.starting_lives);
        assert_eq!(cfg.world.crumble_delay, defaults.world.crumble_delay);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(SimConfig::from_toml("physics = 3").is_err());
    }
}
