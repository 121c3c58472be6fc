//! # Simulation Configuration
//!
//! Every tunable the engine reads lives in [`SimConfig`]. The defaults
//! reproduce the classic ballpit feel: a unit square domain, gentle gravity,
//! volumetric masses and frictionless normal impulses.
//!
//! The struct deserializes from JSON with every field optional:
//!
//! ```json
//! {
//!   "gravity": -0.0005,
//!   "restitution": 0.75,
//!   "mass_rule": "area",
//!   "response": { "model": "mass_mixed_friction", "kinetic_friction": 0.001 }
//! }
//! ```

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// How a body's mass is derived from its radius.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassRule {
    /// `π·r²`
    Area,
    /// `π·r³`
    #[default]
    Volume,
}

impl MassRule {
    #[must_use]
    pub fn mass_for(self, radius: f32) -> f32 {
        match self {
            MassRule::Area => PI * radius * radius,
            MassRule::Volume => PI * radius * radius * radius,
        }
    }
}

/// Coefficients for [`ResponseModel::MassMixedFriction`].
///
/// The friction terms are impulse magnitudes per unit of normal speed, so they
/// are divided by each body's mass when applied. Keep them well below the
/// smallest body mass or contacts will fling bodies apart.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionParams {
    /// Normal speed separating the static and kinetic regimes.
    pub velocity_threshold: f32,
    pub static_friction: f32,
    pub kinetic_friction: f32,
}

impl Default for FrictionParams {
    fn default() -> Self {
        Self {
            velocity_threshold: 0.005,
            static_friction: 0.002,
            kinetic_friction: 0.001,
        }
    }
}

impl FrictionParams {
    /// Coefficient for a contact with the given normal speed.
    #[must_use]
    pub fn coefficient(&self, normal_speed: f32) -> f32 {
        if normal_speed < self.velocity_threshold {
            self.static_friction
        } else {
            self.kinetic_friction
        }
    }
}

/// Velocity response applied to each overlapping pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ResponseModel {
    /// Elastic impulse along the contact normal. Tangential velocity is kept.
    #[default]
    NormalImpulse,
    /// Per-axis 1D elastic mixing followed by a normal friction impulse.
    MassMixedFriction(FrictionParams),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Vertical acceleration in units per step².
    pub gravity: f32,
    /// Fraction of wall-normal speed kept after hitting a wall.
    pub restitution: f32,
    /// Half width of the square domain centred on the origin.
    pub half_extent: f32,
    /// Maximum number of bodies in the store.
    pub capacity: usize,
    pub mass_rule: MassRule,
    pub response: ResponseModel,
    /// Distance substituted for coincident centres.
    pub degenerate_epsilon: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Radius change per unit of scroll.
    pub radius_step: f32,
    pub initial_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: -0.0005,
            restitution: 0.75,
            half_extent: 1.0,
            capacity: 100,
            mass_rule: MassRule::Volume,
            response: ResponseModel::NormalImpulse,
            degenerate_epsilon: 0.1,
            min_radius: 0.01,
            max_radius: 0.25,
            radius_step: 0.05,
            initial_radius: 0.1,
        }
    }
}

impl SimConfig {
    /// Check that the numbers describe a simulation that can run.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        fn reject(msg: impl Into<String>) -> Result<(), PhysicsError> {
            Err(PhysicsError::InvalidConfig(msg.into()))
        }

        if !self.gravity.is_finite() {
            return reject("gravity must be finite");
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return reject(format!("restitution {} not in [0, 1]", self.restitution));
        }
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return reject("half_extent must be positive");
        }
        if self.capacity == 0 {
            return reject("capacity must be at least 1");
        }
        if !(self.degenerate_epsilon.is_finite() && self.degenerate_epsilon > 0.0) {
            return reject("degenerate_epsilon must be positive");
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return reject(format!(
                "radius range [{}, {}] is empty or non-positive",
                self.min_radius, self.max_radius
            ));
        }
        if self.max_radius >= self.half_extent {
            return reject("max_radius must be smaller than half_extent");
        }
        if !(self.min_radius..=self.max_radius).contains(&self.initial_radius) {
            return reject(format!("initial_radius {} outside radius range", self.initial_radius));
        }
        if !(self.radius_step.is_finite() && self.radius_step >= 0.0) {
            return reject("radius_step must be non-negative");
        }
        if let ResponseModel::MassMixedFriction(params) = self.response {
            let FrictionParams { velocity_threshold, static_friction, kinetic_friction } = params;
            if [velocity_threshold, static_friction, kinetic_friction]
                .iter()
                .any(|v| !(v.is_finite() && *v >= 0.0))
            {
                return reject("friction parameters must be finite and non-negative");
            }
        }
        Ok(())
    }

    /// Clamp a requested spawn radius into the configured range.
    #[must_use]
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn restitution_above_one_is_rejected() {
        let config = SimConfig { restitution: 1.5, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(PhysicsError::InvalidConfig(_))));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = SimConfig { capacity: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_friction_is_rejected() {
        let config = SimConfig {
            response: ResponseModel::MassMixedFriction(FrictionParams {
                kinetic_friction: -0.1,
                ..FrictionParams::default()
            }),
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn friction_coefficient_switches_at_threshold() {
        let params = FrictionParams::default();
        assert_eq!(params.coefficient(0.0), params.static_friction);
        assert_eq!(params.coefficient(params.velocity_threshold), params.kinetic_friction);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SimConfig = serde_json::from_str(
            r#"{ "restitution": 0.9, "mass_rule": "area",
                 "response": { "model": "mass_mixed_friction", "kinetic_friction": 0.0005 } }"#,
        )
        .unwrap();
        assert!((config.restitution - 0.9).abs() < 1e-7);
        assert_eq!(config.mass_rule, MassRule::Area);
        assert_eq!(config.capacity, 100);
        match config.response {
            ResponseModel::MassMixedFriction(p) => {
                assert!((p.kinetic_friction - 0.0005).abs() < 1e-9);
                assert_eq!(p.static_friction, FrictionParams::default().static_friction);
            }
            ResponseModel::NormalImpulse => panic!("expected friction model"),
        }
    }

    #[test]
    fn normal_impulse_tag_parses() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "response": { "model": "normal_impulse" } }"#).unwrap();
        assert_eq!(config.response, ResponseModel::NormalImpulse);
    }
}
