//! Spawn controller: the input-facing side of the body store.
//!
//! Tracks the active spawn radius and the last cursor position. The renderer
//! reads [`SpawnController::preview`] to outline the circle that the next
//! spawn would create.

use tracing::{info, warn};

use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::types::{BodyId, BodySnapshot, Vec2};
use crate::world::World;

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnController {
    active_radius: f32,
    cursor: Vec2,
    min_radius: f32,
    max_radius: f32,
    radius_step: f32,
}

impl SpawnController {
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            active_radius: config.clamp_radius(config.initial_radius),
            cursor: Vec2::ZERO,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            radius_step: config.radius_step,
        }
    }

    /// Pick up new radius limits, re-clamping the active radius.
    pub fn reconfigure(&mut self, config: &SimConfig) {
        self.min_radius = config.min_radius;
        self.max_radius = config.max_radius;
        self.radius_step = config.radius_step;
        self.active_radius = self.active_radius.clamp(self.min_radius, self.max_radius);
    }

    #[must_use]
    pub fn active_radius(&self) -> f32 {
        self.active_radius
    }

    /// Set the active radius, clamped to the configured range. Non-finite
    /// input is ignored. Returns the radius now in effect.
    pub fn set_active_radius(&mut self, value: f32) -> f32 {
        if !value.is_finite() {
            warn!(value, "ignoring non-finite radius");
            return self.active_radius;
        }
        self.active_radius = value.clamp(self.min_radius, self.max_radius);
        self.active_radius
    }

    /// Adjust the active radius by `offset` scroll units.
    pub fn scroll(&mut self, offset: f32) -> f32 {
        self.set_active_radius(self.active_radius + offset * self.radius_step)
    }

    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// The circle the next cursor spawn would create.
    #[must_use]
    pub fn preview(&self) -> BodySnapshot {
        BodySnapshot {
            pos: self.cursor,
            radius: self.active_radius,
        }
    }

    /// Spawn a body at `pos` with the active radius.
    ///
    /// # Errors
    ///
    /// Propagates [`World::spawn`] failures; the world is unchanged on error.
    pub fn spawn_at(&self, world: &mut World, pos: Vec2) -> Result<BodyId, PhysicsError> {
        let id = world.spawn(pos, self.active_radius)?;
        info!(id = id.index(), total = world.len(), "spawn request accepted");
        Ok(id)
    }

    /// Spawn a body at the last cursor position.
    ///
    /// # Errors
    ///
    /// See [`SpawnController::spawn_at`].
    pub fn spawn_at_cursor(&self, world: &mut World) -> Result<BodyId, PhysicsError> {
        self.spawn_at(world, self.cursor)
    }
}
