use glam::Vec2;
use tracing::{debug, warn};

use crate::config::WalkerConfig;
use crate::segment::{Direction, LineSegment};

/// Ping-pong traversal over a borrowed list of segments.
///
/// Each step advances `x` linearly by `phase_timer * step_factor` and derives
/// `y` from the line through `start` and `target`, so speed is only accurate
/// on shallow segments. A segment whose endpoints share an `x` coordinate
/// keeps the coefficient at zero and is never completed.
#[derive(Debug, Clone)]
pub struct PathWalker<'a> {
    segments: &'a [LineSegment],
    index: usize,
    direction: Direction,
    start: Vec2,
    target: Vec2,
    phase_timer: f32,
    coefficient: f32,
    step_factor: f32,
    position: Option<Vec2>,
}

impl<'a> PathWalker<'a> {
    pub fn new(segments: &'a [LineSegment], step_factor: f32) -> Self {
        if segments.is_empty() {
            warn!("path walker created with an empty path; it will stay inert");
        }
        let mut walker = Self {
            segments,
            index: 0,
            direction: Direction::Forward,
            start: Vec2::ZERO,
            target: Vec2::ZERO,
            phase_timer: 0.0,
            coefficient: 0.0,
            step_factor: sanitize_step_factor(step_factor),
            position: None,
        };
        walker.reset();
        walker
    }

    pub fn from_config(config: &'a WalkerConfig) -> Self {
        Self::new(&config.segments, config.step_factor)
    }

    /// Back to Forward on segment 0 with a cleared timer.
    pub fn reset(&mut self) {
        self.index = 0;
        self.direction = Direction::Forward;
        self.phase_timer = 0.0;
        self.coefficient = 0.0;
        match self.segments.first() {
            Some(first) => {
                (self.start, self.target) = first.endpoints(Direction::Forward);
                self.position = Some(self.start);
            }
            None => self.position = None,
        }
    }

    /// Advance by `delta_time` and return the new position, or `None` when
    /// the path is empty.
    pub fn step(&mut self, delta_time: f32) -> Option<Vec2> {
        if !self.has_path() {
            return None;
        }

        let delta_time = if delta_time < 0.0 {
            warn!(delta_time, "negative delta time clamped to zero");
            0.0
        } else {
            delta_time
        };
        self.phase_timer += delta_time;

        // Completion is judged on the coefficient left by the previous step.
        if self.coefficient >= 1.0 {
            self.transition();
            self.phase_timer = 0.0;
        }

        let stepped_distance = self.phase_timer * self.step_factor;
        let x = self.start.x + self.direction.sign() * stepped_distance;
        let horizontal_span = self.target.x - self.start.x;
        self.coefficient = if horizontal_span == 0.0 {
            0.0
        } else {
            (x - self.start.x) / horizontal_span
        };

        let position = Vec2::new(
            x,
            self.start.y + self.coefficient * (self.target.y - self.start.y),
        );
        self.position = Some(position);
        Some(position)
    }

    fn transition(&mut self) {
        let last = self.segments.len() - 1;
        match self.direction {
            Direction::Forward if self.index < last => self.index += 1,
            Direction::Backward if self.index > 0 => self.index -= 1,
            _ => self.direction = self.direction.reversed(),
        }
        (self.start, self.target) = self.segments[self.index].endpoints(self.direction);
        debug!(
            index = self.index,
            direction = ?self.direction,
            start = ?self.start,
            target = ?self.target,
            "segment transition"
        );
    }

    pub fn has_path(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn phase_timer(&self) -> f32 {
        self.phase_timer
    }

    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    pub fn step_factor(&self) -> f32 {
        self.step_factor
    }

    /// Negative or non-finite factors are treated as zero.
    pub fn set_step_factor(&mut self, step_factor: f32) {
        self.step_factor = sanitize_step_factor(step_factor);
    }

    /// Last output position; the first segment's start before any step.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Read-only view of the whole path, e.g. for debug drawing.
    pub fn segments(&self) -> &'a [LineSegment] {
        self.segments
    }

    pub fn current_segment(&self) -> Option<&'a LineSegment> {
        self.segments.get(self.index)
    }
}

fn sanitize_step_factor(step_factor: f32) -> f32 {
    if step_factor.is_finite() {
        step_factor.max(0.0)
    } else {
        0.0
    }
}
