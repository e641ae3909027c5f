use ascent_core::assets::{AssetHandle, AssetKey, AssetProvider};
use ascent_core::level::{FeatureRecord, JumpBoostPower, PLATFORM_WIDTH};

use crate::character::COLLISION_LINE_LENGTH;

/// Width of a jump boost spring, in world units.
pub const SPRING_WIDTH: f32 = 30.0;

/// Outcome of landing on a platform, decided by its highest-precedence
/// feature that claims the contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEffect {
    None,
    Burn,
    JumpBoost(JumpBoostPower),
    RepositionPlatforms,
}

/// A feature attached to a runtime platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformFeature {
    record: FeatureRecord,
    handle: AssetHandle,
}

impl PlatformFeature {
    pub fn new(record: FeatureRecord, assets: &dyn AssetProvider) -> Self {
        let key = match record {
            FeatureRecord::JumpBoost { power, .. } => AssetKey::JumpBoost(power),
            FeatureRecord::Flame => AssetKey::Flame,
            FeatureRecord::RepositionSwitch => AssetKey::RepositionSwitch,
            FeatureRecord::VisibleOnJump => AssetKey::VisibleOnJump,
        };
        Self {
            record,
            handle: assets.resolve(key),
        }
    }

    pub fn record(&self) -> &FeatureRecord {
        &self.record
    }

    pub fn handle(&self) -> AssetHandle {
        self.handle
    }

    /// Drawing order, lowest first.
    pub fn render_precedence(&self) -> i32 {
        match self.record {
            FeatureRecord::VisibleOnJump => 0,
            FeatureRecord::Flame => 10,
            FeatureRecord::RepositionSwitch => 20,
            FeatureRecord::JumpBoost { .. } => 30,
        }
    }

    /// Contact resolution order, highest first. `VisibleOnJump` only marks
    /// the platform as hidden and never claims a contact.
    pub fn contact_precedence(&self) -> i32 {
        match self.record {
            FeatureRecord::Flame => 40,
            FeatureRecord::JumpBoost { .. } => 30,
            FeatureRecord::RepositionSwitch => 20,
            FeatureRecord::VisibleOnJump => 10,
        }
    }

    /// Whether a character landing `relative_x` units right of the
    /// platform's left edge touches this feature.
    pub fn is_contact(&self, relative_x: f32) -> bool {
        match self.record {
            FeatureRecord::JumpBoost { position, .. } => {
                let spring_left = position * (PLATFORM_WIDTH - SPRING_WIDTH);
                relative_x + COLLISION_LINE_LENGTH >= spring_left
                    && relative_x <= spring_left + SPRING_WIDTH
            },
            FeatureRecord::Flame | FeatureRecord::RepositionSwitch => true,
            FeatureRecord::VisibleOnJump => false,
        }
    }

    pub fn contact_effect(&self) -> ContactEffect {
        match self.record {
            FeatureRecord::JumpBoost { power, .. } => ContactEffect::JumpBoost(power),
            FeatureRecord::Flame => ContactEffect::Burn,
            FeatureRecord::RepositionSwitch => ContactEffect::RepositionPlatforms,
            FeatureRecord::VisibleOnJump => ContactEffect::None,
        }
    }
}
