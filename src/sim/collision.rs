//! Axis-aligned overlap detection
//!
//! Everything in the playfield is a box: the basket's catch zone and the
//! apple sprite. Overlap is strict, so boxes that only share an edge do not
//! touch.

use glam::Vec2;

/// Axis-aligned bounding box in world pixels (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict intersection test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Offset needed to push this box back inside `[0, width] x [0, height]`
    ///
    /// Boxes larger than the world are pinned to the top-left corner.
    pub fn containment_offset(&self, width: f32, height: f32) -> Vec2 {
        let axis = |min: f32, max: f32, limit: f32| {
            if min < 0.0 {
                -min
            } else if max > limit {
                (limit - max).max(-min)
            } else {
                0.0
            }
        };
        Vec2::new(
            axis(self.min.x, self.max.x, width),
            axis(self.min.y, self.max.y, height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_separated_vertically() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(2.0, 30.0), Vec2::new(4.0, 4.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment_offset() {
        let inside = Aabb::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert_eq!(inside.containment_offset(100.0, 100.0), Vec2::ZERO);

        let left = Aabb::new(Vec2::new(-5.0, 10.0), Vec2::new(20.0, 20.0));
        assert_eq!(left.containment_offset(100.0, 100.0), Vec2::new(5.0, 0.0));

        let right = Aabb::new(Vec2::new(90.0, 10.0), Vec2::new(20.0, 20.0));
        assert_eq!(right.containment_offset(100.0, 100.0), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn test_center() {
        let a = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(a.center(), Vec2::new(25.0, 40.0));
        assert_eq!(a.size(), Vec2::new(30.0, 40.0));
    }
}
