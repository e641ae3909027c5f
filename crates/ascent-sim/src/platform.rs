use ascent_core::assets::{AssetHandle, AssetKey, AssetProvider};
use ascent_core::events::SectionEffect;
use ascent_core::geometry::{Vec2, segment_intersection};
use ascent_core::level::{
    FeatureRecord, MovementProfile, PLATFORM_HEIGHT, PLATFORM_WIDTH, PlatformKind, PlatformRecord,
    VISIBLE_AREA_HEIGHT,
};
use ascent_core::timer::EffectTimer;

use crate::character::{COLLISION_LINE_LENGTH, COLLISION_WIDTH_OFFSET};
use crate::config::WorldConfig;
use crate::features::{ContactEffect, PlatformFeature};
use crate::movement::PlatformMovement;

/// Collapse progress of a crumble platform.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crumble {
    Intact,
    Crumbling(EffectTimer),
    Gone,
}

/// A platform placed in the world.
#[derive(Debug, Clone)]
pub struct Platform {
    kind: PlatformKind,
    handle: AssetHandle,
    movement: PlatformMovement,
    features: Vec<PlatformFeature>,
    /// Feature indices, lowest render precedence first.
    render_order: Vec<usize>,
    /// Feature indices, highest contact precedence first.
    contact_order: Vec<usize>,
    crumble: Crumble,
    crumble_delay: f32,
    hidden_until_jump: bool,
    revealed: EffectTimer,
    reveal_duration: f32,
}

impl Platform {
    pub fn from_record(
        record: &PlatformRecord,
        section_base_y: f32,
        world: &WorldConfig,
        assets: &dyn AssetProvider,
    ) -> Self {
        let (x, y) = record.local_position();
        let anchor = Vec2::new(x, section_base_y + y);
        let movement = PlatformMovement::new(record.movement, anchor, world.reposition_speed);

        let mut records = record.features.clone();
        if record.kind == PlatformKind::Flame && !records.contains(&FeatureRecord::Flame) {
            records.push(FeatureRecord::Flame);
        }
        if matches!(record.movement, MovementProfile::Reposition { .. })
            && !records.contains(&FeatureRecord::RepositionSwitch)
        {
            records.push(FeatureRecord::RepositionSwitch);
        }
        let hidden_until_jump = records.contains(&FeatureRecord::VisibleOnJump);

        let features: Vec<PlatformFeature> = records
            .into_iter()
            .map(|r| PlatformFeature::new(r, assets))
            .collect();

        // stable sorts keep authoring order among equal precedences
        let mut render_order: Vec<usize> = (0..features.len()).collect();
        render_order.sort_by_key(|&i| features[i].render_precedence());
        let mut contact_order: Vec<usize> = (0..features.len()).collect();
        contact_order.sort_by_key(|&i| std::cmp::Reverse(features[i].contact_precedence()));

        Self {
            kind: record.kind,
            handle: assets.resolve(AssetKey::Platform(record.kind)),
            movement,
            features,
            render_order,
            contact_order,
            crumble: Crumble::Intact,
            crumble_delay: world.crumble_delay,
            hidden_until_jump,
            revealed: EffectTimer::default(),
            reveal_duration: world.visible_on_jump_duration,
        }
    }

    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    pub fn handle(&self) -> AssetHandle {
        self.handle
    }

    pub fn movement(&self) -> &PlatformMovement {
        &self.movement
    }

    /// Bottom-left corner.
    pub fn position(&self) -> Vec2 {
        self.movement.position()
    }

    pub fn features_for_rendering(&self) -> impl Iterator<Item = &PlatformFeature> {
        self.render_order.iter().map(|&i| &self.features[i])
    }

    pub fn features_for_contact(&self) -> impl Iterator<Item = &PlatformFeature> {
        self.contact_order.iter().map(|&i| &self.features[i])
    }

    /// The segment a descending character position must cross to land.
    pub fn top_segment(&self) -> (Vec2, Vec2) {
        let p = self.position();
        let top = p.y + PLATFORM_HEIGHT;
        (
            Vec2::new(p.x - COLLISION_LINE_LENGTH, top),
            Vec2::new(p.x + PLATFORM_WIDTH - COLLISION_WIDTH_OFFSET, top),
        )
    }

    /// Where the path `c1 -> c2` lands on this platform, if it does.
    pub fn collide(&self, c1: Vec2, c2: Vec2) -> Option<Vec2> {
        let (p1, p2) = self.top_segment();
        segment_intersection(c1, c2, p1, p2)
    }

    pub fn is_crumbled(&self) -> bool {
        self.crumble == Crumble::Gone
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden_until_jump && !self.revealed.is_active()
    }

    /// Solid and within the padded visible window.
    pub fn is_active(&self, visible_area_position: f32, padding: f32) -> bool {
        if self.is_crumbled() || self.is_hidden() {
            return false;
        }
        let y = self.position().y;
        let lower = visible_area_position - PLATFORM_HEIGHT - padding;
        let upper = visible_area_position + VISIBLE_AREA_HEIGHT + padding;
        y >= lower && y <= upper
    }

    /// Effect of a landing at world x `collision_x`.
    pub fn contact_effect(&self, collision_x: f32) -> ContactEffect {
        let relative_x = collision_x - self.position().x;
        self.features_for_contact()
            .find(|f| f.is_contact(relative_x))
            .map_or(ContactEffect::None, PlatformFeature::contact_effect)
    }

    /// Notify the platform that the character landed on it.
    pub fn on_landed(&mut self) {
        if self.kind == PlatformKind::Crumble && self.crumble == Crumble::Intact {
            self.crumble = Crumble::Crumbling(EffectTimer::new(self.crumble_delay));
        }
    }

    pub fn apply_effect(&mut self, effect: SectionEffect) {
        match effect {
            SectionEffect::RepositionPlatforms => self.movement.switch_side(),
            SectionEffect::VisibleOnJump => {
                if self.hidden_until_jump {
                    self.revealed.set(self.reveal_duration);
                }
            },
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.movement.update(dt);
        self.revealed.tick(dt);
        if let Crumble::Crumbling(mut timer) = self.crumble {
            timer.tick(dt);
            self.crumble = if timer.is_active() {
                Crumble::Crumbling(timer)
            } else {
                Crumble::Gone
            };
        }
    }

    /// Advance by `dt` and, when the platform rose during the step, test
    /// whether it caught a character descending along `path`.
    ///
    /// The path is tested in the platform's end-of-step frame: its start is
    /// shifted by the platform's displacement. A catch reports the landing
    /// point on the platform's end-of-step top.
    pub fn advance(&mut self, dt: f32, path: Option<(Vec2, Vec2)>) -> Option<Vec2> {
        let before = self.position();
        self.update(dt);
        let after = self.position();

        let (c1, c2) = path?;
        if !self.movement.has_vertical_movement() || after.y <= before.y {
            return None;
        }
        let shifted = c1.add(after.sub(before));
        let hit = self.collide(shifted, c2)?;
        Some(Vec2::new(hit.x, after.y + PLATFORM_HEIGHT))
    }
}
