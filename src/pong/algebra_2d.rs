use egui::{Pos2, Vec2};
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::na::Point2;

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn from_min_size(min: Pos2, size: Vec2) -> Self {
        AaBB { min, max: min + size }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

impl AaBB {
    pub fn translate(&self, value: Vec2) -> Self {
        AaBB {
            min: self.min + value,
            max: self.max + value,
        }
    }

    /// same size, top-left corner moved to `min`
    pub fn moved_to(&self, min: Pos2) -> Self {
        AaBB::from_min_size(min, self.size())
    }

    /// touching edges count as overlap
    pub fn overlaps(&self, other: &AaBB) -> bool {
        to_parry(self).intersects(&to_parry(other))
    }
}

fn to_parry(aabb: &AaBB) -> Aabb {
    Aabb::new(
        Point2::new(aabb.min.x, aabb.min.y),
        Point2::new(aabb.max.x, aabb.max.y),
    )
}

/// Vector from `from` to `to`, scaled to length 1.
/// None, if both points are the same
pub fn unit_vector_towards(from: Pos2, to: Pos2) -> Option<Vec2> {
    let d = to - from;
    let distance = (d.x * d.x + d.y * d.y).sqrt();
    if distance == 0.0 {
        None
    } else {
        Some(Vec2::new(d.x / distance, d.y / distance))
    }
}
