//! Pathwalk core: platform-agnostic back-and-forth traversal of 2D line segment paths.

pub mod config;
pub mod segment;
pub mod walker;

pub use config::{load_config, AppConfig, ConfigError, WalkerConfig};
pub use glam::Vec2;
pub use segment::{Direction, LineSegment};
pub use walker::PathWalker;
