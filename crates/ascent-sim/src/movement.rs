use ascent_core::geometry::Vec2;
use ascent_core::level::MovementProfile;

/// Triangle wave over `[0, range]` with period `2 * range`.
fn ping_pong(phase: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    let p = phase.rem_euclid(2.0 * range);
    if p <= range { p } else { 2.0 * range - p }
}

/// Runtime position of a platform (or patrolling enemy) following a
/// [`MovementProfile`] from its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformMovement {
    profile: MovementProfile,
    anchor: Vec2,
    elapsed: f32,
    /// Current offset from the anchor along the reposition range.
    reposition_offset: f32,
    reposition_right: bool,
    reposition_speed: f32,
}

impl PlatformMovement {
    pub fn new(profile: MovementProfile, anchor: Vec2, reposition_speed: f32) -> Self {
        let (reposition_offset, reposition_right) = match profile {
            MovementProfile::Reposition {
                range,
                initial_right,
            } => (if initial_right { range } else { 0.0 }, initial_right),
            _ => (0.0, false),
        };
        Self {
            profile,
            anchor,
            elapsed: 0.0,
            reposition_offset,
            reposition_right,
            reposition_speed,
        }
    }

    pub fn profile(&self) -> &MovementProfile {
        &self.profile
    }

    pub fn has_vertical_movement(&self) -> bool {
        self.profile.has_vertical_movement()
    }

    /// Position after `elapsed` seconds of periodic movement.
    pub fn position_at(&self, elapsed: f32) -> Vec2 {
        match self.profile {
            MovementProfile::None => self.anchor,
            MovementProfile::Horizontal {
                range,
                speed,
                initial_offset,
            } => Vec2::new(
                self.anchor.x + ping_pong(initial_offset + speed * elapsed, range),
                self.anchor.y,
            ),
            MovementProfile::Vertical {
                range,
                speed,
                initial_offset,
            } => Vec2::new(
                self.anchor.x,
                self.anchor.y + ping_pong(initial_offset + speed * elapsed, range),
            ),
            MovementProfile::Reposition { .. } => {
                Vec2::new(self.anchor.x + self.reposition_offset, self.anchor.y)
            },
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position_at(self.elapsed)
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if let MovementProfile::Reposition { range, .. } = self.profile {
            let target = if self.reposition_right { range } else { 0.0 };
            let step = self.reposition_speed * dt;
            let delta = target - self.reposition_offset;
            self.reposition_offset = if delta.abs() <= step {
                target
            } else {
                self.reposition_offset + step.copysign(delta)
            };
        }
    }

    /// Send a reposition platform gliding to the opposite edge. No-op for
    /// other profiles.
    pub fn switch_side(&mut self) {
        if matches!(self.profile, MovementProfile::Reposition { .. }) {
            self.reposition_right = !self.reposition_right;
        }
    }

    pub fn is_on_right(&self) -> bool {
        self.reposition_right
    }
}
