use thiserror::Error;

use brawl_shared::{CodeError, ControlVector, MoveKind, ObservationError, ObservationSource, WeaponType};

/// Failure while producing one tick's control vector.
///
/// There is no retry path: the error reaches the driving simulation as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error(transparent)]
    Observation(#[from] ObservationError),
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error("no attack timing entry for {weapon:?} {move_kind:?}")]
    MissingTiming {
        weapon: WeaponType,
        move_kind: MoveKind,
    },
}

/// Per-tick decision policy for one fighter.
pub trait Policy: Send {
    fn name(&self) -> &str;
    fn act(&mut self, obs: &dyn ObservationSource) -> Result<ControlVector, PolicyError>;
}

/// Policy that presses nothing - useful for testing.
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn name(&self) -> &str {
        "idle"
    }

    fn act(&mut self, _obs: &dyn ObservationSource) -> Result<ControlVector, PolicyError> {
        Ok(ControlVector::none())
    }
}
