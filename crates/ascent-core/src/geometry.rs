use serde::{Deserialize, Serialize};

/// Tolerance used when deciding that two segments are parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// 2D vector in world units. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True when the circle and the rectangle share any area.
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        let closest_x = self.center.x.clamp(rect.x, rect.x + rect.width);
        let closest_y = self.center.y.clamp(rect.y, rect.y + rect.height);
        let dx = self.center.x - closest_x;
        let dy = self.center.y - closest_y;
        dx * dx + dy * dy < self.radius * self.radius
    }
}

/// Intersection of the path `a1 -> a2` with the segment `b1 -> b2`.
///
/// Returns `None` for parallel or zero-length segments, and when the path
/// merely starts on the other segment (`t == 0`). A hit at the end of the
/// path counts, so a body landing exactly on a surface is detected once.
pub fn segment_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let r = a2.sub(a1);
    let s = b2.sub(b1);
    let denom = r.cross(s);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let qp = b1.sub(a1);
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if t <= 0.0 || t > 1.0 || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(a1.add(r.scale(t)))
}

/// Euclidean modulus for wrapping coordinates into `[0, modulus)`.
pub fn positive_modulus(value: f32, modulus: f32) -> f32 {
    let m = value % modulus;
    let wrapped = if m < 0.0 { m + modulus } else { m };
    // tiny negative remainders round up to `modulus` in f32
    if wrapped >= modulus { 0.0 } else { wrapped }
}
