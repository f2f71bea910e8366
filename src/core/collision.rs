//! Axis-aligned bounding boxes.
//!
//! World coordinates grow right (x) and down (y). Overlap is strict on both
//! axes: boxes that merely share an edge do not collide.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// True if `actor` overlaps any of `boxes`.
pub fn any_overlap<I>(actor: &Aabb, boxes: I) -> bool
where
    I: IntoIterator<Item = Aabb>,
{
    boxes.into_iter().any(|b| actor.overlaps(&b))
}
