use serde::{Deserialize, Serialize};

/// Width of the playable world in world units; horizontal positions wrap at this value.
pub const WORLD_WIDTH: f32 = 480.0;
/// Height of the scrolled visible window in world units.
pub const VISIBLE_AREA_HEIGHT: f32 = 800.0;

/// Height of one rise-section step in world units.
pub const STEP_HEIGHT: f32 = 15.0;
/// Width of one horizontal offset slot in world units.
pub const OFFSET_WIDTH: f32 = 20.0;
pub const PLATFORM_WIDTH: f32 = 120.0;
pub const PLATFORM_HEIGHT: f32 = 15.0;
/// Largest horizontal offset index that keeps a platform inside the world.
pub const MAX_PLATFORM_OFFSET: i32 = ((WORLD_WIDTH - PLATFORM_WIDTH) / OFFSET_WIDTH) as i32;
/// Largest vertical gap, in steps, the character can clear with a normal jump.
pub const MAX_PLATFORM_DISTANCE_STEPS: i32 = 12;

/// Platform material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Collapses shortly after the character lands on it.
    Crumble,
    /// Burns an unshielded character on contact.
    Flame,
}

/// How a platform moves over time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MovementProfile {
    #[default]
    None,
    /// Ping-pongs horizontally over `[0, range]` at `speed` units/s, starting
    /// `initial_offset` units into its `2 * range` cycle.
    Horizontal {
        range: f32,
        speed: f32,
        initial_offset: f32,
    },
    /// Rests at one edge of `range` and glides to the other edge on a
    /// reposition broadcast.
    Reposition { range: f32, initial_right: bool },
    /// Ping-pongs vertically over `[0, range]`. Only produced by hand-authored data.
    Vertical {
        range: f32,
        speed: f32,
        initial_offset: f32,
    },
}

impl MovementProfile {
    /// Horizontal travel reserved by this profile, in world units.
    pub fn horizontal_range(&self) -> f32 {
        match self {
            MovementProfile::Horizontal { range, .. } | MovementProfile::Reposition { range, .. } => {
                *range
            },
            MovementProfile::None | MovementProfile::Vertical { .. } => 0.0,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, MovementProfile::None)
    }

    pub fn has_vertical_movement(&self) -> bool {
        matches!(self, MovementProfile::Vertical { .. })
    }
}

/// Jump boost strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpBoostPower {
    Low,
    Medium,
    High,
}

/// Behavior attached to a platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureRecord {
    /// Spring at `position` (fraction of the platform width, `[0, 1)`).
    JumpBoost { position: f32, power: JumpBoostPower },
    /// Burning patch covering the whole platform.
    Flame,
    /// Switch that makes every reposition platform flip sides.
    RepositionSwitch,
    /// Platform is hidden and not solid until the character launches off
    /// another platform (or farts), then shows for a short window.
    VisibleOnJump,
}

/// One generated platform. Identity is the `(step, offset)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub kind: PlatformKind,
    pub step: i32,
    pub offset: i32,
    #[serde(default)]
    pub movement: MovementProfile,
    #[serde(default)]
    pub features: Vec<FeatureRecord>,
}

impl PlatformRecord {
    pub fn new(step: i32, offset: i32) -> Self {
        Self {
            kind: PlatformKind::Normal,
            step,
            offset,
            movement: MovementProfile::None,
            features: Vec::new(),
        }
    }

    /// Bottom-left corner of the platform inside its section.
    pub fn local_position(&self) -> (f32, f32) {
        (
            self.offset as f32 * OFFSET_WIDTH,
            self.step as f32 * STEP_HEIGHT,
        )
    }
}

/// A generated (or hand-authored) rise section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiseSectionData {
    pub name: String,
    pub step_range: i32,
    pub difficulty: i32,
    pub platforms: Vec<PlatformRecord>,
}

impl RiseSectionData {
    /// Filled steps in ascending order, without duplicates.
    pub fn filled_steps(&self) -> Vec<i32> {
        let mut steps: Vec<i32> = self.platforms.iter().map(|p| p.step).collect();
        steps.sort_unstable();
        steps.dedup();
        steps
    }

    /// Height of the section in world units.
    pub fn height(&self) -> f32 {
        self.step_range as f32 * STEP_HEIGHT
    }
}
