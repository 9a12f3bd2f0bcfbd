//! Axis-aligned bounding boxes for restricting the camera's look-at target.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box with `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two arbitrary corners. The corners are sorted per axis,
    /// so argument order does not matter.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerate box containing a single point.
    #[must_use]
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box enclosing all `points`, or `None` if empty.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = Self::from_point(iter.next()?);
        Some(iter.fold(first, |acc, p| acc.union(&Self::from_point(p))))
    }

    /// Smallest box enclosing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Component-wise clamp of `p` into the box.
    #[must_use]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        p.max(self.min).min(self.max)
    }

    /// Multiply both z bounds by `factor` about the world origin.
    ///
    /// Used to give the camera target room to travel in depth in front of
    /// and behind the model. The result is re-sorted, so a negative factor
    /// still yields a valid box.
    #[must_use]
    pub fn scaled_depth(&self, factor: f32) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        min.z *= factor;
        max.z *= factor;
        Self::new(min, max)
    }
}
