//! Axis-aligned bounding boxes for overlap testing
//!
//! Every entity is a plain rectangle. Overlap is the strict test: each box's
//! start must be before the other's end on both axes, so boxes that merely
//! touch along an edge do not overlap.

use glam::Vec2;

/// An axis-aligned bounding box, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left position and a size
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test (symmetric; touching edges don't count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));

        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 20.0));
        let inner = Aabb::new(Vec2::new(10.0, 5.0), Vec2::new(5.0, 10.0));

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0,
            ay in -500.0f32..500.0,
            aw in 0.1f32..120.0,
            ah in 0.1f32..120.0,
            bx in -500.0f32..500.0,
            by in -500.0f32..500.0,
            bw in 0.1f32..120.0,
            bh in 0.1f32..120.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn box_overlaps_itself(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.1f32..120.0,
            h in 0.1f32..120.0,
        ) {
            let a = Aabb::new(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(a.overlaps(&a));
        }
    }
}
