//! Command-line interface for the `ballpit` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use physics::{FrictionParams, ResponseModel};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "ballpit", version, about = "Bouncing circles in a box, one step per frame")]
pub struct Cli {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// JSON simulation config. Missing fields take their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the collision response model from the config.
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// JSON input script replayed against the world.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Pace the loop at 60 frames per second instead of running flat out.
    #[arg(long)]
    pub realtime: bool,

    /// Reload `--config` whenever it changes on disk.
    #[arg(long, requires = "config")]
    pub watch: bool,

    /// Write the final snapshot as JSON to this path.
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Log a progress line every N frames (0 disables it).
    #[arg(long, default_value_t = 50)]
    pub log_every: u64,

    /// Window size in pixels used to map script coordinates.
    #[arg(long, default_value_t = 800.0, value_parser = parse_window_extent)]
    pub window_width: f32,

    #[arg(long, default_value_t = 800.0, value_parser = parse_window_extent)]
    pub window_height: f32,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

fn parse_window_extent(s: &str) -> Result<f32, String> {
    let pixels: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if pixels.is_finite() && pixels > 0.0 {
        Ok(pixels)
    } else {
        Err(format!("window size must be a positive number of pixels, got {s}"))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelArg {
    NormalImpulse,
    MassMixedFriction,
}

impl ModelArg {
    /// Resolve against the configured model, keeping configured friction
    /// coefficients when the model already matches.
    #[must_use]
    pub fn resolve(self, configured: ResponseModel) -> ResponseModel {
        match (self, configured) {
            (ModelArg::NormalImpulse, _) => ResponseModel::NormalImpulse,
            (ModelArg::MassMixedFriction, ResponseModel::MassMixedFriction(params)) => {
                ResponseModel::MassMixedFriction(params)
            }
            (ModelArg::MassMixedFriction, ResponseModel::NormalImpulse) => {
                ResponseModel::MassMixedFriction(FrictionParams::default())
            }
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
