//! Scripted input replay.
//!
//! A script is a JSON list of frame-stamped [`InputEvent`]s:
//!
//! ```json
//! [
//!   { "frame": 0,  "event": { "type": "scroll", "dy": 1 } },
//!   { "frame": 0,  "event": { "type": "spawn", "x": 400, "y": 100 } },
//!   { "frame": 30, "event": { "type": "spawn", "x": 420, "y": 100 } }
//! ]
//! ```
//!
//! Events stamped with frame `n` are applied before the `n`-th step. Events
//! sharing a frame keep their file order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::InputEvent;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub frame: u64,
    pub event: InputEvent,
}

#[derive(Clone, Debug, Default)]
pub struct InputScript {
    entries: Vec<ScriptEntry>,
    cursor: usize,
}

impl InputScript {
    #[must_use]
    pub fn new(mut entries: Vec<ScriptEntry>) -> Self {
        entries.sort_by_key(|entry| entry.frame);
        Self { entries, cursor: 0 }
    }

    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the text is not a list of script entries.
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<ScriptEntry> =
            serde_json::from_str(text).context("Failed to parse input script")?;
        Ok(Self::new(entries))
    }

    /// Load a script file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Events due at or before `frame` that have not been handed out yet.
    pub fn drain_due(&mut self, frame: u64) -> &[ScriptEntry] {
        let start = self.cursor;
        while self.cursor < self.entries.len() && self.entries[self.cursor].frame <= frame {
            self.cursor += 1;
        }
        &self.entries[start..self.cursor]
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
