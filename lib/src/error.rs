//! Generation error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwingError>;

/// Swing generation failure.
///
/// Every variant is a local construction failure: nothing partial is
/// produced, and retrying the same inputs cannot help. Callers surface the
/// error and prompt for a different club or tier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwingError {
    /// Club identifier outside the supported set.
    #[error("unknown club '{id}'")]
    UnknownClub { id: String },

    /// Malformed weight vector handed to the sampler. A broken weight
    /// table, not bad user input.
    #[error("invalid weights: {reason}")]
    InvalidWeights { reason: &'static str },

    /// Non-physical ball-flight inputs. Unreachable from the built-in club
    /// profiles, but derived values are guarded anyway.
    #[error("invalid trajectory input: distance={distance}m launch={launch_angle}deg")]
    InvalidTrajectoryInput { distance: f64, launch_angle: f64 },

    /// Non-physical swing speed.
    #[error("invalid swing speed: {speed}")]
    InvalidSwingSpeed { speed: f64 },
}
