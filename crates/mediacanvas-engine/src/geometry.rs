//! Axis-aligned bounding boxes and rotated envelopes.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world units.
///
/// `(x, y)` is the top-left corner. Width and height are expected to be
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    /// Creates a box from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a box spanning two corners given in any order.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let min_x = x1.min(x2);
        let min_y = y1.min(y2);
        Self::new(min_x, min_y, (x1 - x2).abs(), (y1 - y2).abs())
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the box.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Separating-axis test. Boxes that only share an edge or a corner
    /// intersect; only strict separation reports `false`.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.x > self.max_x()
            || other.max_x() < self.x
            || other.y > self.max_y()
            || other.max_y() < self.y)
    }

    /// Inclusive point containment.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.max_x() && y >= self.y && y <= self.max_y()
    }

    /// Whether `other` lies entirely inside this box (edges inclusive).
    pub fn contains_box(&self, other: &Aabb) -> bool {
        other.x >= self.x
            && other.max_x() <= self.max_x()
            && other.y >= self.y
            && other.max_y() <= self.max_y()
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Aabb::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Splits into four equal quadrants, ordered NE, NW, SE, SW.
    ///
    /// Screen convention: y grows downward, so "north" is the smaller y.
    pub fn quadrants(&self) -> [Aabb; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let mid_x = self.x + hw;
        let mid_y = self.y + hh;
        [
            Aabb::new(mid_x, self.y, hw, hh),
            Aabb::new(self.x, self.y, hw, hh),
            Aabb::new(mid_x, mid_y, hw, hh),
            Aabb::new(self.x, mid_y, hw, hh),
        ]
    }

    /// Axis-aligned envelope of this box rotated by `rotation` radians about
    /// its center. Returns the box unchanged when `rotation` is zero.
    pub fn rotated(&self, rotation: f32) -> Aabb {
        if rotation == 0.0 {
            return *self;
        }

        let (cx, cy) = self.center();
        let (sin, cos) = rotation.sin_cos();
        let corners = [
            (self.x, self.y),
            (self.max_x(), self.y),
            (self.max_x(), self.max_y()),
            (self.x, self.max_y()),
        ];

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for (px, py) in corners {
            let dx = px - cx;
            let dy = py - cy;
            let rx = cx + dx * cos - dy * sin;
            let ry = cy + dx * sin + dy * cos;
            min_x = min_x.min(rx);
            min_y = min_y.min(ry);
            max_x = max_x.max(rx);
            max_y = max_y.max(ry);
        }

        Aabb::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
