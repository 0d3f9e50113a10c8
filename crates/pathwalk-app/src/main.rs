use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathwalk_core::{load_config, AppConfig, PathWalker};
use pathwalk_platform::{DebugDraw, LogDebugDraw, LogPositionSink, PositionSink, Result};

const DEFAULT_CONFIG_FILE: &str = "pathwalk.toml";

fn main() {
    // Init logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Pathwalk starting");
    if let Err(e) = run_app() {
        eprintln!("Pathwalk error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE)?,
        None => {
            warn!("no config given and {DEFAULT_CONFIG_FILE} not found; using defaults");
            AppConfig::default()
        }
    };
    info!(
        segments = config.walker.segments.len(),
        step_factor = config.walker.step_factor,
        tick_rate = config.tick_rate,
        ticks = config.ticks,
        "config loaded"
    );

    let mut sink = LogPositionSink::new(config.tick_rate.max(1.0) as u64);
    let mut debug_draw = config.walker.draw_debug.then_some(LogDebugDraw);
    let last = drive(&config, &mut sink, debug_draw.as_mut().map(|d| d as &mut dyn DebugDraw))?;
    match last {
        Some(position) => info!(x = position.x, y = position.y, "finished"),
        None => info!("finished without a path"),
    }
    Ok(())
}

/// Fixed-timestep driver: one walker step per tick, output handed to `sink`.
fn drive(
    config: &AppConfig,
    sink: &mut dyn PositionSink,
    mut debug_draw: Option<&mut dyn DebugDraw>,
) -> Result<Option<pathwalk_core::Vec2>> {
    let mut walker = PathWalker::from_config(&config.walker);
    let delta_time = config.delta_time();
    for _ in 0..config.ticks {
        if let Some(draw) = debug_draw.as_deref_mut() {
            draw.draw_segments(walker.segments())?;
        }
        if let Some(position) = walker.step(delta_time) {
            sink.apply(position)?;
        }
    }
    if let Some(draw) = debug_draw {
        draw.clear()?;
    }
    Ok(walker.position())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathwalk_core::{LineSegment, Vec2, WalkerConfig};

    #[derive(Default)]
    struct CountingDraw {
        draws: u32,
        clears: u32,
    }

    impl DebugDraw for CountingDraw {
        fn draw_segments(&mut self, _segments: &[LineSegment]) -> Result<()> {
            self.draws += 1;
            Ok(())
        }
        fn clear(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }
    }

    fn config(segments: Vec<LineSegment>, ticks: u32) -> AppConfig {
        AppConfig {
            walker: WalkerConfig {
                step_factor: 5.0,
                draw_debug: true,
                segments,
            },
            tick_rate: 1.0,
            ticks,
        }
    }

    #[test]
    fn drive_feeds_every_tick_to_the_sink() {
        let config = config(vec![LineSegment::new(Vec2::ZERO, Vec2::new(10.0, 0.0))], 3);
        let mut positions: Vec<Vec2> = Vec::new();
        let mut draw = CountingDraw::default();
        let last = drive(&config, &mut positions, Some(&mut draw as &mut dyn DebugDraw))
            .unwrap();
        assert_eq!(
            positions,
            vec![Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0)]
        );
        assert_eq!(last, Some(Vec2::new(10.0, 0.0)));
        assert_eq!(draw.draws, 3);
        assert_eq!(draw.clears, 1);
    }

    #[test]
    fn drive_with_empty_path_outputs_nothing() {
        let config = config(Vec::new(), 10);
        let mut positions: Vec<Vec2> = Vec::new();
        let last = drive(&config, &mut positions, None).unwrap();
        assert!(positions.is_empty());
        assert_eq!(last, None);
    }
}
