//! # Ballpit World
//!
//! [`World`] owns every body and drives the fixed step. Bodies are only ever
//! appended; their index is their [`BodyId`] for the life of the world.
//!
//! One call to [`World::step`] runs, in order:
//!
//! 1. integration of all bodies,
//! 2. the pair scan with positional correction and velocity response,
//! 3. wall containment.

use tracing::{debug, info};

use crate::boundary::apply_bounds;
use crate::collision::resolve_collisions;
use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::integrator::integrate;
use crate::types::{Body, BodyId, BodySnapshot, Vec2};

/// Per-step counters and aggregate quantities, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldStats {
    pub frame: u64,
    pub bodies: usize,
    pub contacts: usize,
    pub wall_hits: usize,
    pub momentum: Vec2,
    pub kinetic_energy: f32,
}

pub struct World {
    bodies: Vec<Body>,
    config: SimConfig,
    frame: u64,
    last_contacts: usize,
    last_wall_hits: usize,
}

impl World {
    /// Create an empty world.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] when `config` does not validate.
    pub fn new(config: SimConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::with_capacity(config.capacity),
            config,
            frame: 0,
            last_contacts: 0,
            last_wall_hits: 0,
        })
    }

    /// Append a body at rest.
    ///
    /// # Errors
    ///
    /// See [`World::spawn_with_velocity`].
    pub fn spawn(&mut self, pos: Vec2, radius: f32) -> Result<BodyId, PhysicsError> {
        self.spawn_with_velocity(pos, Vec2::ZERO, radius)
    }

    /// Append a body with an initial velocity.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidPosition`] when `pos` or `vel` has a
    /// non-finite component, [`PhysicsError::InvalidRadius`] when `radius` is
    /// not a finite value in the configured range and
    /// [`PhysicsError::CapacityExceeded`] when the store is full. The store is
    /// unchanged on error.
    pub fn spawn_with_velocity(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
    ) -> Result<BodyId, PhysicsError> {
        if ![pos.x, pos.y, vel.x, vel.y].into_iter().all(f32::is_finite) {
            return Err(PhysicsError::InvalidPosition {
                x: pos.x,
                y: pos.y,
                vx: vel.x,
                vy: vel.y,
            });
        }
        let (min, max) = (self.config.min_radius, self.config.max_radius);
        if !(radius.is_finite() && (min..=max).contains(&radius)) {
            return Err(PhysicsError::InvalidRadius { radius, min, max });
        }
        if self.bodies.len() >= self.config.capacity {
            return Err(PhysicsError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let id = BodyId(self.bodies.len());
        self.bodies.push(Body::new(pos, vel, radius, self.config.mass_rule));
        info!(id = id.index(), x = pos.x, y = pos.y, radius, "spawned body");
        Ok(id)
    }

    /// Advance the world by one fixed step.
    pub fn step(&mut self) -> WorldStats {
        integrate(&mut self.bodies, self.config.gravity);
        self.last_contacts = resolve_collisions(&mut self.bodies, &self.config);
        self.last_wall_hits = apply_bounds(
            &mut self.bodies,
            self.config.half_extent,
            self.config.restitution,
        );
        self.frame += 1;

        let stats = self.stats();
        debug!(
            frame = stats.frame,
            contacts = stats.contacts,
            wall_hits = stats.wall_hits,
            "step complete"
        );
        stats
    }

    /// Run `steps` fixed steps and return the stats of the last one.
    pub fn run(&mut self, steps: usize) -> WorldStats {
        for _ in 0..steps {
            self.step();
        }
        self.stats()
    }

    /// Swap in new tunables between steps.
    ///
    /// Existing bodies keep their radius; masses are re-derived when the mass
    /// rule changes.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] when the new config does not
    /// validate, its capacity is below the live body count, or its
    /// `half_extent` does not exceed the largest live radius. The old config
    /// stays in place on error.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<(), PhysicsError> {
        config.validate()?;
        if config.capacity < self.bodies.len() {
            return Err(PhysicsError::InvalidConfig(format!(
                "capacity {} is below the {} live bodies",
                config.capacity,
                self.bodies.len()
            )));
        }
        let largest = self.bodies.iter().map(|b| b.radius).fold(0.0_f32, f32::max);
        if config.half_extent <= largest {
            return Err(PhysicsError::InvalidConfig(format!(
                "half_extent {} does not exceed live radius {largest}",
                config.half_extent
            )));
        }

        if config.mass_rule != self.config.mass_rule {
            for body in &mut self.bodies {
                body.mass = config.mass_rule.mass_for(body.radius);
            }
        }
        self.config = config;
        info!(config = ?self.config, "world reconfigured");
        Ok(())
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Position and radius of every body, in spawn order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn stats(&self) -> WorldStats {
        let (momentum, kinetic_energy) = self
            .bodies
            .iter()
            .fold((Vec2::ZERO, 0.0), |(p, e), body| {
                (p + body.momentum(), e + body.kinetic_energy())
            });

        WorldStats {
            frame: self.frame,
            bodies: self.bodies.len(),
            contacts: self.last_contacts,
            wall_hits: self.last_wall_hits,
            momentum,
            kinetic_energy,
        }
    }
}
