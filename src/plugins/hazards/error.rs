//! Spawner configuration errors.
//!
//! These are the only failures in the hazard pipeline and they all happen at
//! construction time. Pool exhaustion is not an error: `acquire` returns `None`.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SpawnerConfigError {
    /// Pool capacity must be at least 1.
    ZeroCapacity,
    /// Pooled entities need a positive lifetime.
    ZeroLifetime,
    /// The repeat period must be positive.
    ZeroPeriod,
    /// A seconds value could not be turned into a `Duration`
    /// (negative, NaN or too large).
    InvalidDuration { field: &'static str, value: f32 },
    /// Spawn extents must be finite and non-negative.
    InvalidRadius { axis: char, value: f32 },
}

impl fmt::Display for SpawnerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnerConfigError::ZeroCapacity => write!(f, "pool capacity must be at least 1"),
            SpawnerConfigError::ZeroLifetime => write!(f, "hazard lifetime must be positive"),
            SpawnerConfigError::ZeroPeriod => write!(f, "spawn period must be positive"),
            SpawnerConfigError::InvalidDuration { field, value } => {
                write!(f, "{field} is not a valid duration: {value}")
            }
            SpawnerConfigError::InvalidRadius { axis, value } => {
                write!(f, "spawn radius on {axis} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl std::error::Error for SpawnerConfigError {}
