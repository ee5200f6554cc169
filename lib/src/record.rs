//! The synthesized swing record and its sample types.
//!
//! These are pure data structures with no generation logic. The
//! synthesizers in `synth` produce them; hosts serialize them for display.
//! Records are immutable value aggregates: each generation call returns a
//! fresh, independently-owned record that is safe to hand to any number of
//! readers.

use serde::{Deserialize, Serialize};

use crate::{Club, ShotShape};

/// Named segment of the swing used to tag sensor samples. Six canonical
/// phases, in temporal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingPhase {
    Address,
    Takeaway,
    Top,
    Downswing,
    Impact,
    FollowThrough,
}

impl SwingPhase {
    /// All phases in temporal order.
    pub const ALL: &[SwingPhase] = &[
        SwingPhase::Address,
        SwingPhase::Takeaway,
        SwingPhase::Top,
        SwingPhase::Downswing,
        SwingPhase::Impact,
        SwingPhase::FollowThrough,
    ];

    /// Nominal timestamp of this phase within a ~2 s swing, in ms.
    pub fn timestamp_ms(self) -> u32 {
        match self {
            SwingPhase::Address => 0,
            SwingPhase::Takeaway => 300,
            SwingPhase::Top => 800,
            SwingPhase::Downswing => 1200,
            SwingPhase::Impact => 1400,
            SwingPhase::FollowThrough => 2000,
        }
    }
}

/// Coarser four-segment labelling used for club-path samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPhase {
    Backswing,
    Downswing,
    Impact,
    FollowThrough,
}

impl PathPhase {
    /// Classify a normalized swing-progress value in [0, 1].
    pub fn from_progress(progress: f64) -> PathPhase {
        if progress < 0.3 {
            PathPhase::Backswing
        } else if progress < 0.7 {
            PathPhase::Downswing
        } else if progress < 0.8 {
            PathPhase::Impact
        } else {
            PathPhase::FollowThrough
        }
    }
}

/// One sample of the ball-flight curve. `x` is forward carry (m), `y`
/// height (m), `z` signed lateral offset, `time` elapsed flight time (s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub time: f64,
}

/// One sample of the club-head path, with the head's instantaneous speed
/// and the swing segment it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingPathPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub speed: f64,
    pub phase: PathPhase,
}

/// One inertial snapshot, taken at a fixed phase timestamp.
///
/// Axis order for both channels is [x, y, z]. Acceleration scales with
/// swing speed; angular rates with fixed peak constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSample {
    pub phase: SwingPhase,
    pub time_ms: u32,
    pub acceleration: [f64; 3],
    pub gyroscope: [f64; 3],
    pub club_face_angle: f64, // deg
    pub wrist_angle: f64,     // deg
}

/// A complete synthesized swing: scalar metrics plus the three curves that
/// drive a visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingRecord {
    pub club: Club,
    pub distance: f64, // m, whole-valued
    /// 0-100 score, floored at 50.
    pub accuracy: f64,
    pub swing_speed: f64, // m/s, 1 decimal
    pub ball_speed: f64,
    pub launch_angle: f64, // deg, 1 decimal
    pub spin_rate: f64,    // rpm, whole-valued
    pub shape: ShotShape,
    /// Signed meters of lateral bend at full carry. Zero iff `shape` is
    /// straight; sign matches the shape's bend direction.
    pub curvature: f64,
    pub trajectory: Vec<TrajectoryPoint>,
    pub swing_path: Vec<SwingPathPoint>,
    pub sensors: Vec<SensorSample>,
}
