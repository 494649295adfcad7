use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contract violation while reading an observation frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservationError {
    #[error("missing observation key: {0}")]
    MissingKey(String),
    #[error("observation key {key} has {got} values, expected at least {expected}")]
    TooFewValues {
        key: String,
        expected: usize,
        got: usize,
    },
}

/// Keyed read-only view of one frame's observation.
///
/// Every key the policy reads must be present every tick; a missing key is a
/// configuration error surfaced to the caller, not a recoverable case.
pub trait ObservationSource {
    /// Raw section for `key`.
    fn section(&self, key: &str) -> Result<&[f32], ObservationError>;

    fn scalar(&self, key: &str) -> Result<f32, ObservationError> {
        let s = self.section(key)?;
        s.first().copied().ok_or_else(|| ObservationError::TooFewValues {
            key: key.to_string(),
            expected: 1,
            got: 0,
        })
    }

    fn pair(&self, key: &str) -> Result<Vec2, ObservationError> {
        let s = self.section(key)?;
        if s.len() < 2 {
            return Err(ObservationError::TooFewValues {
                key: key.to_string(),
                expected: 2,
                got: s.len(),
            });
        }
        Ok(Vec2::new(s[0], s[1]))
    }

    /// Scalar coerced to an integer code.
    fn code(&self, key: &str) -> Result<i32, ObservationError> {
        Ok(self.scalar(key)? as i32)
    }

    /// Scalar interpreted as a 0/1 flag.
    fn flag(&self, key: &str) -> Result<bool, ObservationError> {
        Ok(self.code(key)? == 1)
    }
}

/// Map-backed observation, the form traces are recorded in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapObservation {
    sections: HashMap<String, Vec<f32>>,
}

impl MapObservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, values: impl Into<Vec<f32>>) -> &mut Self {
        self.sections.insert(key.to_string(), values.into());
        self
    }
}

impl ObservationSource for MapObservation {
    fn section(&self, key: &str) -> Result<&[f32], ObservationError> {
        self.sections
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| ObservationError::MissingKey(key.to_string()))
    }
}
