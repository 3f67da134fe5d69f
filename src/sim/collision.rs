//! Collision detection for circles, rectangles and the arena edges

use glam::Vec2;

use crate::math::Rect;

/// Circle against an axis-aligned rectangle; touching counts as a hit
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) <= radius * radius
}

/// Which arena edges a point has crossed, per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeHits {
    pub x: bool,
    pub y: bool,
}

/// Per-axis test of `pos` against the arena rectangle
///
/// Sitting exactly on an edge is not a crossing.
pub fn arena_edge_hits(pos: Vec2, arena: &Rect) -> EdgeHits {
    let max = arena.max();
    EdgeHits {
        x: pos.x < arena.x || pos.x > max.x,
        y: pos.y < arena.y || pos.y > max.y,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Rect {
        Rect::new(100.0, 100.0, 25.0, 28.0)
    }

    #[test]
    fn test_circle_rect_side_overlap() {
        assert!(circle_overlaps_rect(Vec2::new(92.0, 110.0), 10.0, &paddle()));
    }

    #[test]
    fn test_circle_rect_corner_miss() {
        // Diagonal distance to the corner is ~11.3, radius 10
        assert!(!circle_overlaps_rect(Vec2::new(92.0, 92.0), 10.0, &paddle()));
    }

    #[test]
    fn test_circle_rect_touching_counts() {
        assert!(circle_overlaps_rect(Vec2::new(90.0, 110.0), 10.0, &paddle()));
    }

    #[test]
    fn test_circle_center_inside() {
        assert!(circle_overlaps_rect(Vec2::new(102.0, 115.0), 5.0, &paddle()));
    }

    #[test]
    fn test_arena_edge_hits() {
        let arena = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(arena_edge_hits(Vec2::new(400.0, 300.0), &arena), EdgeHits::default());
        assert_eq!(
            arena_edge_hits(Vec2::new(800.5, 300.0), &arena),
            EdgeHits { x: true, y: false }
        );
        assert_eq!(
            arena_edge_hits(Vec2::new(-1.0, 601.0), &arena),
            EdgeHits { x: true, y: true }
        );
        // On the edge is still inside
        assert_eq!(arena_edge_hits(Vec2::new(800.0, 0.0), &arena), EdgeHits::default());
    }

    #[test]
    fn test_reflect_velocity() {
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x + 100.0).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }
}
