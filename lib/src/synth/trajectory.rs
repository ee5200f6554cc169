//! Ball-flight curve synthesis.
//!
//! Ideal projectile motion under constant gravity, solved backwards: given
//! the carry distance the record already committed to, find the launch
//! velocity that lands the ball exactly there. No drag, spin lift, or
//! wind: the output is a plausible arc for display, not ballistics.

use crate::{Result, SwingError, TrajectoryPoint};

const GRAVITY: f64 = 9.81; // m/s²

/// Flight-time subdivisions; the curve has `SAMPLES + 1` points.
const SAMPLES: usize = 80;

/// On-screen amplification of the lateral bow. Tuned for plot legibility,
/// not physics.
const LATERAL_GAIN: f64 = 20.0;

/// Synthesize the ball-flight curve for a shot.
///
/// `distance` is the carry in meters, `launch_angle` the launch elevation
/// in degrees (exclusive 0-90), `curvature` the signed lateral bend at
/// full carry. The bow is zero at launch and landing and peaks mid-carry.
pub fn synthesize(distance: f64, launch_angle: f64, curvature: f64) -> Result<Vec<TrajectoryPoint>> {
    if !(distance.is_finite() && distance > 0.0)
        || !(launch_angle > 0.0 && launch_angle < 90.0)
    {
        return Err(SwingError::InvalidTrajectoryInput {
            distance,
            launch_angle,
        });
    }

    let launch = launch_angle.to_radians();
    // Range equation inverted for the launch speed, then total flight time
    // from the horizontal component.
    let v0 = (distance * GRAVITY / (2.0 * launch).sin()).sqrt();
    let flight_time = distance / (v0 * launch.cos());

    let mut points = Vec::with_capacity(SAMPLES + 1);
    for i in 0..=SAMPLES {
        let t = (i as f64 / SAMPLES as f64) * flight_time;
        let x = v0 * launch.cos() * t;
        // Ground is y = 0; no bounce or roll-out modelling.
        let y = (v0 * launch.sin() * t - 0.5 * GRAVITY * t * t).max(0.0);
        let bow = 4.0 * (x / distance) * (1.0 - x / distance);
        let z = curvature * bow * LATERAL_GAIN;
        points.push(TrajectoryPoint { x, y, z, time: t });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_has_exactly_81_points() {
        let points = synthesize(155.0, 18.0, 0.0).unwrap();
        assert_eq!(points.len(), 81);
    }

    #[test]
    fn starts_on_the_ground_at_time_zero() {
        let points = synthesize(230.0, 12.0, 5.0).unwrap();
        assert_eq!(points[0].time, 0.0);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[0].x, 0.0);
    }

    #[test]
    fn height_never_negative_and_carry_never_regresses() {
        let points = synthesize(95.0, 26.0, -8.0).unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
            assert!(pair[1].time >= pair[0].time);
        }
        assert!(points.iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn lands_at_the_requested_carry() {
        let points = synthesize(180.0, 16.0, 0.0).unwrap();
        let last = points.last().unwrap();
        assert!((last.x - 180.0).abs() < 1e-6);
        assert!(last.y.abs() < 1e-6);
    }

    #[test]
    fn bow_is_zero_at_ends_and_peaks_with_curvature_sign() {
        let points = synthesize(200.0, 14.0, 12.0).unwrap();
        assert!(points.first().unwrap().z.abs() < 1e-9);
        assert!(points.last().unwrap().z.abs() < 1e-6);
        let mid = points[40];
        assert!((mid.z - 12.0 * LATERAL_GAIN).abs() < 1e-6);

        let hooked = synthesize(200.0, 14.0, -12.0).unwrap();
        assert!(hooked[40].z < 0.0);
    }

    #[test]
    fn non_physical_inputs_are_rejected() {
        assert!(synthesize(0.0, 18.0, 0.0).is_err());
        assert!(synthesize(-5.0, 18.0, 0.0).is_err());
        assert!(synthesize(155.0, 0.0, 0.0).is_err());
        assert!(synthesize(155.0, 90.0, 0.0).is_err());
        assert!(synthesize(f64::NAN, 18.0, 0.0).is_err());
    }
}
