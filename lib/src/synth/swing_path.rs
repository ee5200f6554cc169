//! Club-head path synthesis.
//!
//! A parametric 3-D arc over normalized swing progress: a wide horizontal
//! sweep, a vertical arc riding a baseline height, a double-frequency
//! lateral wobble for face movement, and a speed-scaled lift through the
//! strike.

use std::f64::consts::PI;

use crate::{ClubCategory, PathPhase, Result, SwingError, SwingPathPoint};

/// Progress subdivisions; the path has `SAMPLES + 1` points.
const SAMPLES: usize = 60;

/// Fraction of a full half-turn swept to each side of address (±126°).
const ARC_SPAN: f64 = 1.4;

const HORIZONTAL_RADIUS: f64 = 120.0;
const VERTICAL_RADIUS: f64 = 80.0;
const BASE_HEIGHT: f64 = 30.0;
const WOBBLE_RADIUS: f64 = 20.0;
const LIFT_GAIN: f64 = 10.0;

/// Swing speed that produces unit wobble and lift scaling.
const REFERENCE_SPEED: f64 = 40.0;

/// Synthesize the club-head path for a swing.
///
/// Instantaneous speed follows |sin(progress·π)|·`speed`: zero at address
/// and finish, peaking mid-swing. Each point carries the `PathPhase` its
/// progress falls in.
pub fn synthesize(speed: f64, category: ClubCategory) -> Result<Vec<SwingPathPoint>> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(SwingError::InvalidSwingSpeed { speed });
    }

    let speed_factor = speed / REFERENCE_SPEED;
    let arc_factor = category.arc_factor();

    let mut points = Vec::with_capacity(SAMPLES + 1);
    for i in 0..=SAMPLES {
        let progress = i as f64 / SAMPLES as f64;
        let angle = (progress - 0.5) * PI * ARC_SPAN;

        let x = angle.sin() * HORIZONTAL_RADIUS * arc_factor;
        let y = angle.cos() * VERTICAL_RADIUS + BASE_HEIGHT;
        let z = (angle * 2.0).sin() * WOBBLE_RADIUS * speed_factor;
        // The head rises through the strike in proportion to speed.
        let lift = (progress * PI).sin() * speed_factor * LIFT_GAIN;

        points.push(SwingPathPoint {
            x,
            y: y + lift,
            z,
            speed: (progress * PI).sin().abs() * speed,
            phase: PathPhase::from_progress(progress),
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_has_exactly_61_points() {
        let points = synthesize(40.0, ClubCategory::Mid).unwrap();
        assert_eq!(points.len(), 61);
    }

    #[test]
    fn speed_stays_within_the_swing_speed_envelope() {
        let swing_speed = 38.5;
        let points = synthesize(swing_speed, ClubCategory::Long).unwrap();
        for p in &points {
            assert!(p.speed >= 0.0);
            assert!(p.speed <= swing_speed);
        }
        assert!(points.first().unwrap().speed.abs() < 1e-9);
        assert!(points.last().unwrap().speed.abs() < 1e-9);
    }

    #[test]
    fn phases_partition_the_path_in_order() {
        let points = synthesize(32.0, ClubCategory::Mid).unwrap();
        let phases: Vec<PathPhase> = points.iter().map(|p| p.phase).collect();

        // Thresholds at 0.3, 0.7, 0.8 over 60 subdivisions.
        assert!(phases[..18].iter().all(|p| *p == PathPhase::Backswing));
        assert!(phases[18..42].iter().all(|p| *p == PathPhase::Downswing));
        assert!(phases[42..48].iter().all(|p| *p == PathPhase::Impact));
        assert!(phases[48..].iter().all(|p| *p == PathPhase::FollowThrough));
    }

    #[test]
    fn long_clubs_sweep_a_wider_arc() {
        let long = synthesize(40.0, ClubCategory::Long).unwrap();
        let short = synthesize(40.0, ClubCategory::Short).unwrap();
        let widest = |points: &[SwingPathPoint]| {
            points.iter().map(|p| p.x.abs()).fold(0.0, f64::max)
        };
        assert!(widest(&long) > widest(&short));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        assert!(synthesize(0.0, ClubCategory::Mid).is_err());
        assert!(synthesize(-1.0, ClubCategory::Mid).is_err());
        assert!(synthesize(f64::NAN, ClubCategory::Mid).is_err());
    }
}
