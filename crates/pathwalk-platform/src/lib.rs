//! Host-side collaborator traits so `pathwalk-core` stays free of any renderer or engine.

use pathwalk_core::{LineSegment, Vec2};
use tracing::{info, trace};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Receives the walker's output position once per tick.
pub trait PositionSink {
    fn apply(&mut self, position: Vec2) -> Result<()>;
}

/// Optional visualisation of the path being walked. Gets a read-only view.
pub trait DebugDraw {
    fn draw_segments(&mut self, segments: &[LineSegment]) -> Result<()>;
    fn clear(&mut self) -> Result<()> { Ok(()) }
}

impl PositionSink for Vec<Vec2> {
    fn apply(&mut self, position: Vec2) -> Result<()> {
        self.push(position);
        Ok(())
    }
}

// ---------------- tracing-backed implementations ----------------

/// Logs every `every`-th position at info level.
pub struct LogPositionSink {
    every: u64,
    ticks: u64,
}

impl LogPositionSink {
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1), ticks: 0 }
    }
}

impl PositionSink for LogPositionSink {
    fn apply(&mut self, position: Vec2) -> Result<()> {
        if self.ticks % self.every == 0 {
            info!(tick = self.ticks, x = position.x, y = position.y, "position");
        }
        self.ticks += 1;
        Ok(())
    }
}

/// Dumps segment endpoints at trace level instead of drawing them.
pub struct LogDebugDraw;

impl DebugDraw for LogDebugDraw {
    fn draw_segments(&mut self, segments: &[LineSegment]) -> Result<()> {
        for (index, points) in LineSegment::as_points(segments).chunks_exact(2).enumerate() {
            trace!(index, a = ?points[0], b = ?points[1], "debug line");
        }
        Ok(())
    }
}
