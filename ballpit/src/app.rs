//! # Ballpit Application Logic
//!
//! This module drives the frame loop: one physics step per frame, with input
//! applied between frames.
//!
//! The primary function, [`run`], is called from `main` with the parsed
//! command line. It builds a [`physics::World`] from the configured tunables,
//! replays an optional input script against it, optionally hot-reloads the
//! config file through [`crate::watcher`], and logs progress every few frames.
//!
//! There is no window. A renderer would read [`FrameDriver::snapshot`] and
//! [`FrameDriver::preview`] after each frame; the `--dump` flag writes the
//! final snapshot as JSON instead.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use physics::{BodySnapshot, SimConfig, SpawnController, World, WorldStats};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::cli::Cli;
use crate::input::{apply_event_lenient, InputEvent, ScreenMapping};
use crate::script::InputScript;
use crate::watcher::ConfigWatcher;

const TARGET_FPS: f32 = 60.0;

/// Load a config file, or the defaults when no path is given.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or when the parsed config
/// does not validate.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    config.validate().context("Config rejected")?;
    Ok(config)
}

/// Owns the world and everything that feeds it input between frames.
pub struct FrameDriver {
    world: World,
    spawner: SpawnController,
    mapping: ScreenMapping,
    script: InputScript,
}

impl FrameDriver {
    /// # Errors
    ///
    /// Fails when `config` does not validate.
    pub fn new(config: SimConfig, mapping: ScreenMapping, script: InputScript) -> Result<Self> {
        let spawner = SpawnController::new(&config);
        let world = World::new(config).context("Failed to build world")?;
        Ok(Self {
            world,
            spawner,
            mapping,
            script,
        })
    }

    /// Apply a live input event immediately.
    pub fn handle_input(&mut self, event: &InputEvent) {
        apply_event_lenient(event, &self.mapping, &mut self.spawner, &mut self.world);
    }

    /// Apply due script events, then step the world once.
    pub fn advance(&mut self) -> WorldStats {
        let frame = self.world.frame();
        for entry in self.script.drain_due(frame) {
            apply_event_lenient(&entry.event, &self.mapping, &mut self.spawner, &mut self.world);
        }
        self.world.step()
    }

    /// Swap in a new config between frames.
    ///
    /// # Errors
    ///
    /// Fails when the world rejects the config; the old config stays active.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<()> {
        self.world
            .reconfigure(config)
            .context("World rejected new config")?;
        self.spawner.reconfigure(self.world.config());
        Ok(())
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.world.snapshot()
    }

    /// Outline circle for the next spawn.
    #[must_use]
    pub fn preview(&self) -> BodySnapshot {
        self.spawner.preview()
    }
}

/// Final state written by `--dump`.
#[derive(Debug, Serialize)]
pub struct Dump {
    pub frame: u64,
    pub bodies: Vec<BodySnapshot>,
    pub preview: BodySnapshot,
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub frames: u64,
    pub stats: WorldStats,
}

/// Run the frame loop described by `cli`.
///
/// # Errors
///
/// Returns config, script and dump I/O errors. Rejected spawns and failed
/// config reloads are logged and do not stop the run.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.response = model.resolve(config.response);
    }
    info!(
        response = ?config.response,
        mass_rule = ?config.mass_rule,
        capacity = config.capacity,
        "Initializing ballpit world..."
    );

    let script = match cli.script.as_deref() {
        Some(path) => InputScript::load(path)?,
        None => InputScript::default(),
    };
    if !script.is_empty() {
        info!("Loaded {} scripted input events", script.len());
    }

    let mapping = ScreenMapping::new(cli.window_width, cli.window_height);
    let mut driver = FrameDriver::new(config, mapping, script)?;

    let watcher = match (cli.watch, cli.config.as_deref()) {
        (true, Some(path)) => match ConfigWatcher::start(path) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                error!("Failed to start config watcher: {e:?}");
                None
            }
        },
        _ => None,
    };

    let frame_duration = Duration::from_secs_f32(1.0 / TARGET_FPS);
    info!("Starting simulation loop for {} frames...", cli.frames);

    let mut stats = driver.world().stats();
    for i in 0..cli.frames {
        let frame_start = Instant::now();

        if let Some(watcher) = watcher.as_ref() {
            if watcher.poll() {
                reload(&mut driver, watcher.path(), cli);
            }
        }

        stats = driver.advance();

        if cli.log_every > 0 && (i + 1) % cli.log_every == 0 {
            info!(
                frame = stats.frame,
                bodies = stats.bodies,
                contacts = stats.contacts,
                kinetic_energy = stats.kinetic_energy,
                "Simulation frame complete"
            );
        }

        if cli.realtime {
            let frame_time = frame_start.elapsed();
            if frame_time < frame_duration {
                std::thread::sleep(frame_duration - frame_time);
            }
        }
    }

    info!("Simulation loop finished after {} frames with {} bodies", cli.frames, stats.bodies);

    if let Some(path) = cli.dump.as_deref() {
        write_dump(&driver, path)?;
    }

    Ok(RunSummary {
        frames: cli.frames,
        stats,
    })
}

fn reload(driver: &mut FrameDriver, path: &Path, cli: &Cli) {
    debug!("Config change detected at {}", path.display());
    let reloaded = load_config(Some(path)).and_then(|mut config| {
        if let Some(model) = cli.model {
            config.response = model.resolve(config.response);
        }
        driver.reconfigure(config)
    });
    match reloaded {
        Ok(()) => info!("Config reloaded from {}", path.display()),
        Err(e) => warn!("Keeping previous config: {e:#}"),
    }
}

fn write_dump(driver: &FrameDriver, path: &Path) -> Result<()> {
    let dump = Dump {
        frame: driver.world().frame(),
        bodies: driver.snapshot(),
        preview: driver.preview(),
    };
    let json = serde_json::to_string_pretty(&dump).context("Failed to serialize snapshot")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Final snapshot written to {}", path.display());
    Ok(())
}
