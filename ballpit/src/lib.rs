//! # Ballpit
//!
//! Headless driver for the [`physics`] crate's circle simulation.
//!
//! The physics crate owns the world and its fixed step. This crate provides
//! the plumbing a windowed front end would otherwise supply:
//!
//! -   [`input`]: pixel-space mouse and scroll events mapped onto the
//!     [`physics::SpawnController`].
//! -   [`script`]: frame-stamped input replay from JSON.
//! -   [`watcher`]: hot reload of the JSON config between frames.
//! -   [`app`]: the frame loop itself, one step per frame.
//! -   [`cli`]: the `clap` command line.

pub mod app;
pub mod cli;
pub mod input;
pub mod script;
pub mod watcher;

pub use physics;
