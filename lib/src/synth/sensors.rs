//! Inertial sensor stream synthesis.
//!
//! One snapshot per swing phase at the phase's nominal timestamp. Every
//! call jitters independently: repeated generation for identical inputs
//! yields a different stream, unlike the deterministic trajectory and
//! path curves.

use std::f64::consts::PI;

use rand::Rng;

use crate::{Club, SensorSample, SwingPhase};

/// Peak angular rates (deg/s) around the lead and trail axes.
const GYRO_SCALE: [f64; 2] = [200.0, 150.0];

/// Wrist hinge at address (deg) and its per-phase release step.
const WRIST_BASE: f64 = 20.0;
const WRIST_STEP: f64 = 8.0;

/// Synthesize the six-sample sensor stream for a swing.
///
/// Acceleration amplitudes scale with `speed`; angular rates use the fixed
/// peak constants. Club-face spread doubles from the downswing onwards.
/// `club` is part of the contract for per-club sensor variation, but the
/// current tables are club-independent.
pub fn synthesize(speed: f64, _club: Club, rng: &mut impl Rng) -> Vec<SensorSample> {
    let count = SwingPhase::ALL.len() as f64;
    SwingPhase::ALL
        .iter()
        .enumerate()
        .map(|(k, &phase)| {
            let spread = k as f64 * PI / count;
            let twist = k as f64 * 2.0 * PI / count;
            SensorSample {
                phase,
                time_ms: phase.timestamp_ms(),
                acceleration: [
                    spread.sin() * speed * rng.gen_range(0.9..1.1),
                    spread.cos() * speed * rng.gen_range(0.9..1.1),
                    rng.gen_range(0.0..0.3) * speed,
                ],
                gyroscope: [
                    twist.sin() * GYRO_SCALE[0] * rng.gen_range(0.85..1.15),
                    twist.cos() * GYRO_SCALE[1] * rng.gen_range(0.85..1.15),
                    rng.gen_range(-50.0..50.0),
                ],
                // Face control degrades approaching and after impact.
                club_face_angle: if k < 4 {
                    rng.gen_range(-5.0..5.0)
                } else {
                    rng.gen_range(-10.0..10.0)
                },
                wrist_angle: WRIST_BASE - k as f64 * WRIST_STEP + rng.gen_range(0.0..10.0),
            }
        })
        .collect()
}
