use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which way the walker is consuming the segment list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Sign applied to the stepped distance along x.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// A straight path piece between two endpoints.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl LineSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// `(start, target)` for walking this segment in `direction`.
    pub fn endpoints(&self, direction: Direction) -> (Vec2, Vec2) {
        match direction {
            Direction::Forward => (self.a, self.b),
            Direction::Backward => (self.b, self.a),
        }
    }

    pub fn horizontal_span(&self) -> f32 {
        self.b.x - self.a.x
    }

    /// Vertical or zero-length. The walker never completes such a segment.
    pub fn is_degenerate(&self) -> bool {
        self.horizontal_span() == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }

    /// Flat `[a0, b0, a1, b1, ...]` view, ready for a line-list draw call.
    pub fn as_points(segments: &[LineSegment]) -> &[Vec2] {
        bytemuck::cast_slice(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_direction() {
        let seg = LineSegment::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(seg.endpoints(Direction::Forward), (seg.a, seg.b));
        assert_eq!(seg.endpoints(Direction::Backward), (seg.b, seg.a));
    }

    #[test]
    fn vertical_and_point_segments_are_degenerate() {
        assert!(LineSegment::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)).is_degenerate());
        assert!(LineSegment::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)).is_degenerate());
        assert!(!LineSegment::new(Vec2::ZERO, Vec2::new(0.5, 10.0)).is_degenerate());
    }

    #[test]
    fn direction_reverses_and_signs() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed(), Direction::Forward);
        assert_eq!(Direction::Backward.sign(), -1.0);
    }

    #[test]
    fn points_view_is_flat_endpoint_list() {
        let path = [
            LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
            LineSegment::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0)),
        ];
        let points = LineSegment::as_points(&path);
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], Vec2::new(10.0, 0.0));
        assert_eq!(points[3], Vec2::new(20.0, 5.0));
    }
}
