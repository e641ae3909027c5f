use serde::{Deserialize, Serialize};

use ascent_core::assets::{AssetHandle, AssetKey, AssetProvider};
use ascent_core::entity::EnemyKind;
use ascent_core::geometry::{Rect, Vec2};
use ascent_core::level::MovementProfile;

use crate::movement::PlatformMovement;

/// Placement of an enemy in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPlacement {
    pub kind: EnemyKind,
    /// Bottom-left corner of the patrol anchor.
    pub position: Vec2,
    #[serde(default)]
    pub patrol: MovementProfile,
}

/// Footprint of each enemy kind.
pub fn enemy_size(kind: EnemyKind) -> Vec2 {
    match kind {
        EnemyKind::Saw => Vec2::new(50.0, 50.0),
        EnemyKind::Bat => Vec2::new(60.0, 30.0),
        EnemyKind::Knight => Vec2::new(50.0, 80.0),
    }
}

/// A hostile entity patrolling the world.
#[derive(Debug, Clone)]
pub struct Enemy {
    kind: EnemyKind,
    size: Vec2,
    patrol: PlatformMovement,
    handle: AssetHandle,
}

impl Enemy {
    pub fn new(placement: EnemyPlacement, assets: &dyn AssetProvider) -> Self {
        Self {
            kind: placement.kind,
            size: enemy_size(placement.kind),
            // reposition patrols never receive a switch, so their speed is unused
            patrol: PlatformMovement::new(placement.patrol, placement.position, 0.0),
            handle: assets.resolve(AssetKey::Enemy(placement.kind)),
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn handle(&self) -> AssetHandle {
        self.handle
    }

    pub fn position(&self) -> Vec2 {
        self.patrol.position()
    }

    pub fn bounds(&self) -> Rect {
        let p = self.position();
        Rect::new(p.x, p.y, self.size.x, self.size.y)
    }

    /// Whether any part of the enemy is inside the visible window.
    pub fn is_visible(&self, visible_area_position: f32, visible_height: f32) -> bool {
        let b = self.bounds();
        b.y + b.height >= visible_area_position && b.y <= visible_area_position + visible_height
    }

    pub fn collides(&self, character: &Rect) -> bool {
        self.bounds().overlaps(character)
    }

    pub fn update(&mut self, dt: f32) {
        self.patrol.update(dt);
    }
}
