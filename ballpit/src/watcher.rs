//! # Config Hot-Reloading
//!
//! Watches the simulation config file and reports changes to the frame loop.
//!
//! The watcher from the [`notify`](https://crates.io/crates/notify) crate runs
//! its callback on its own thread. That thread never touches the world: it
//! only sends the changed path down an [`mpsc`] channel, and the frame loop
//! drains the channel between steps with [`ConfigWatcher::poll`].

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use tracing::{error, info};

/// Keeps the OS watcher alive and owns the receiving end of the channel.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<PathBuf>,
    path: PathBuf,
}

impl ConfigWatcher {
    /// Start watching `path`.
    ///
    /// The parent directory is watched rather than the file itself, since
    /// editors often replace the file on save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file watcher cannot be created or the
    /// directory cannot be watched.
    pub fn start(path: &Path) -> Result<Self> {
        info!("Initializing config hot-reload watcher for {}", path.display());

        let path = path
            .canonicalize()
            .with_context(|| format!("Config file {} not found", path.display()))?;
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .context("Config file has no parent directory")?;

        let (tx, changes) = mpsc::channel();
        let target = path.clone();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            handle_file_event(result, &target, &tx);
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", directory.display()))?;

        info!("Config watcher active - monitoring '{}'", path.display());
        Ok(Self {
            _watcher: watcher,
            changes,
            path,
        })
    }

    /// Non-blocking check for changes. Several events for the same save are
    /// collapsed into one.
    #[must_use]
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while self.changes.try_recv().is_ok() {
            changed = true;
        }
        changed
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Handle file system events from the watcher thread
fn handle_file_event(result: notify::Result<Event>, target: &Path, tx: &Sender<PathBuf>) {
    match result {
        Ok(event) => process_file_event(&event, target, tx),
        Err(e) => error!("File watcher error: {:?}", e),
    }
}

/// Forward modifications and creations of the watched file only
fn process_file_event(event: &Event, target: &Path, tx: &Sender<PathBuf>) {
    if !event.kind.is_modify() && !event.kind.is_create() {
        return;
    }

    for path in &event.paths {
        if path == target {
            // The receiver is gone once the frame loop exits; nothing to do then.
            let _ = tx.send(path.clone());
        }
    }
}
