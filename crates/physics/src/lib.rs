#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Ballpit Physics Engine
//!
//! A small fixed-step engine for bouncing disks in a square box.
//!
//! Bodies are point-mass circles living in `[-1, 1]²` (the half width is
//! configurable). Each rendered frame advances the world by exactly one step;
//! velocities are expressed in world units per step.
//!
//! ## Key Components
//!
//! -   **Body store:** [`World`] owns the bodies in spawn order, enforces the
//!     configured capacity and drives the step.
//! -   **Integration:** semi-implicit Euler under constant gravity, see
//!     [`integrator`].
//! -   **Collisions:** an O(n²) pair scan with radius-weighted positional
//!     correction and a selectable [`ResponseModel`], see [`collision`].
//! -   **Walls:** per-axis clamping with restitution, see [`boundary`].
//! -   **Spawning:** [`SpawnController`] keeps the active radius and cursor for
//!     the input layer.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{SimConfig, SpawnController, Vec2, World};
//!
//! let config = SimConfig::default();
//! let mut world = World::new(config.clone())?;
//! let spawner = SpawnController::new(&config);
//! spawner.spawn_at(&mut world, Vec2::new(0.0, 0.5))?;
//!
//! for _ in 0..60 {
//!     world.step();
//! }
//! assert!(world.snapshot()[0].pos.y < 0.5);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod boundary;
pub mod collision;
pub mod config;
pub mod error;
pub mod integrator;
pub mod spawn;
pub mod types;
pub mod world;

pub use config::{FrictionParams, MassRule, ResponseModel, SimConfig};
pub use error::PhysicsError;
pub use spawn::SpawnController;
pub use types::{snapshot_bytes, Body, BodyId, BodySnapshot, Vec2};
pub use world::{World, WorldStats};
