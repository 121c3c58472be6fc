use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("body store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("radius {radius} outside [{min}, {max}]")]
    InvalidRadius { radius: f32, min: f32, max: f32 },
    #[error("non-finite spawn state: position ({x}, {y}), velocity ({vx}, {vy})")]
    InvalidPosition { x: f32, y: f32, vx: f32, vy: f32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
