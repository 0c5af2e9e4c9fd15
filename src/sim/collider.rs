//! Axis-aligned bounding boxes
//!
//! Every entity rebuilds its box each update; boxes are plain values and never shared.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    /// The empty box (intersects nothing)
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// Inverted box that fails every overlap test
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of full `size` centered on `center`
    pub fn from_center_and_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Same box moved by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Grow the box vertically by `amount` on both ends
    pub fn stretched_y(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec3::Y * amount,
            max: self.max + Vec3::Y * amount,
        }
    }

    /// Overlap test; touching faces count as overlapping
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y
            || other.max.z < self.min.z
            || other.min.z > self.max.z)
    }
}
