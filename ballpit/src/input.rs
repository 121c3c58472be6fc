//! # Input Translation
//!
//! Turns window-space input (pixels, mouse buttons, scroll wheel) into calls on
//! the physics crate's [`SpawnController`]. Pixel `(0, 0)` is the top-left
//! corner of the window; world `(-1, 1)` is the top-left corner of the domain.

use physics::{BodyId, PhysicsError, SpawnController, Vec2, World};
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_WINDOW_SIZE: f32 = 800.0;

/// Window dimensions used to map pixels to world coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenMapping {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_SIZE,
            height: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ScreenMapping {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a pixel position to world coordinates.
    #[must_use]
    pub fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new((x / self.width) * 2.0 - 1.0, 1.0 - (y / self.height) * 2.0)
    }
}

/// A single input event, in window pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Mouse moved.
    Cursor { x: f32, y: f32 },
    /// Left button pressed at the current cursor.
    Click,
    /// Scroll wheel moved by `dy` notches.
    Scroll { dy: f32 },
    /// Move the cursor to `(x, y)` and click.
    Spawn { x: f32, y: f32 },
}

/// Apply one event. Returns the id of a spawned body, if any.
///
/// # Errors
///
/// Spawn failures from the physics crate are returned untouched so the caller
/// can decide whether a full store is fatal.
pub fn apply_event(
    event: &InputEvent,
    mapping: &ScreenMapping,
    spawner: &mut SpawnController,
    world: &mut World,
) -> Result<Option<BodyId>, PhysicsError> {
    match *event {
        InputEvent::Cursor { x, y } => {
            spawner.set_cursor(mapping.to_world(x, y));
            Ok(None)
        }
        InputEvent::Click => spawner.spawn_at_cursor(world).map(Some),
        InputEvent::Scroll { dy } => {
            let radius = spawner.scroll(dy);
            tracing::debug!(radius, "active radius adjusted");
            Ok(None)
        }
        InputEvent::Spawn { x, y } => {
            spawner.set_cursor(mapping.to_world(x, y));
            spawner.spawn_at_cursor(world).map(Some)
        }
    }
}

/// Like [`apply_event`], but a rejected spawn is logged and dropped.
pub fn apply_event_lenient(
    event: &InputEvent,
    mapping: &ScreenMapping,
    spawner: &mut SpawnController,
    world: &mut World,
) -> Option<BodyId> {
    match apply_event(event, mapping, spawner, world) {
        Ok(id) => id,
        Err(e) => {
            warn!("input {event:?} rejected: {e}");
            None
        }
    }
}
