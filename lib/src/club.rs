//! Club identity and baseline ball-striking profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Golf club.
///
/// Variants serialize to short bag codes (`"DR"`, `"7I"`, etc.) via serde
/// rename. `Display` returns the same code. `from_code()` parses
/// case-insensitively. The set is closed: these seven clubs are the only
/// ones the generator carries baselines for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Club {
    #[serde(rename = "DR")]
    Driver,
    #[serde(rename = "3W")]
    Wood3,
    #[serde(rename = "5I")]
    Iron5,
    #[serde(rename = "7I")]
    Iron7,
    #[serde(rename = "9I")]
    Iron9,
    #[serde(rename = "PW")]
    PitchingWedge,
    #[serde(rename = "SW")]
    SandWedge,
}

impl Club {
    /// All variants in bag order (driver through sand wedge).
    pub const ALL: &[Club] = &[
        Club::Driver,
        Club::Wood3,
        Club::Iron5,
        Club::Iron7,
        Club::Iron9,
        Club::PitchingWedge,
        Club::SandWedge,
    ];

    /// Parse a club code case-insensitively. Returns `None` for unknown codes.
    pub fn from_code(s: &str) -> Option<Club> {
        match s.to_uppercase().as_str() {
            "DR" => Some(Club::Driver),
            "3W" => Some(Club::Wood3),
            "5I" => Some(Club::Iron5),
            "7I" => Some(Club::Iron7),
            "9I" => Some(Club::Iron9),
            "PW" => Some(Club::PitchingWedge),
            "SW" => Some(Club::SandWedge),
            _ => None,
        }
    }

    /// Baseline statistics for this club. Infallible: the club set is
    /// closed and every member has a profile.
    pub fn profile(self) -> ClubProfile {
        match self {
            Club::Driver => ClubProfile::new(230.0, 40.0, 12.0, 2800.0),
            Club::Wood3 => ClubProfile::new(210.0, 38.0, 13.0, 3200.0),
            Club::Iron5 => ClubProfile::new(180.0, 34.0, 16.0, 5000.0),
            Club::Iron7 => ClubProfile::new(155.0, 32.0, 18.0, 6200.0),
            Club::Iron9 => ClubProfile::new(125.0, 28.0, 22.0, 7500.0),
            Club::PitchingWedge => ClubProfile::new(95.0, 26.0, 26.0, 8500.0),
            Club::SandWedge => ClubProfile::new(75.0, 22.0, 30.0, 9500.0),
        }
    }

    /// Swing-arc size class for this club.
    ///
    /// Driver and woods swing long, irons mid, wedges short.
    pub fn category(self) -> ClubCategory {
        match self {
            Club::Driver | Club::Wood3 => ClubCategory::Long,
            Club::Iron5 | Club::Iron7 | Club::Iron9 => ClubCategory::Mid,
            Club::PitchingWedge | Club::SandWedge => ClubCategory::Short,
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Club::Driver => "DR",
            Club::Wood3 => "3W",
            Club::Iron5 => "5I",
            Club::Iron7 => "7I",
            Club::Iron9 => "9I",
            Club::PitchingWedge => "PW",
            Club::SandWedge => "SW",
        };
        f.write_str(code)
    }
}

/// Per-club baselines every synthesizer reads from. Loaded once, never
/// mutated. Distance in meters, swing speed in m/s, launch angle in
/// degrees, spin in rpm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubProfile {
    pub base_distance: f64,
    pub base_swing_speed: f64,
    pub base_launch_angle: f64,
    pub base_spin_rate: f64,
}

impl ClubProfile {
    const fn new(
        base_distance: f64,
        base_swing_speed: f64,
        base_launch_angle: f64,
        base_spin_rate: f64,
    ) -> Self {
        Self {
            base_distance,
            base_swing_speed,
            base_launch_angle,
            base_spin_rate,
        }
    }
}

/// Swing-arc size class. Drives the horizontal arc amplitude of the
/// synthesized club path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubCategory {
    Long,
    Mid,
    Short,
}

impl ClubCategory {
    /// Horizontal arc amplitude relative to a mid iron.
    pub fn arc_factor(self) -> f64 {
        match self {
            ClubCategory::Long => 1.2,
            ClubCategory::Mid => 1.0,
            ClubCategory::Short => 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_parses_case_insensitively() {
        assert_eq!(Club::from_code("dr"), Some(Club::Driver));
        assert_eq!(Club::from_code("7i"), Some(Club::Iron7));
        assert_eq!(Club::from_code("Sw"), Some(Club::SandWedge));
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(Club::from_code(""), None);
        assert_eq!(Club::from_code("PT"), None);
        assert_eq!(Club::from_code("4H"), None);
    }

    #[test]
    fn every_club_has_positive_baselines() {
        for club in Club::ALL {
            let p = club.profile();
            assert!(p.base_distance > 0.0, "{club}");
            assert!(p.base_swing_speed > 0.0, "{club}");
            assert!(p.base_launch_angle > 0.0, "{club}");
            assert!(p.base_spin_rate > 0.0, "{club}");
        }
    }

    #[test]
    fn display_round_trips_through_from_code() {
        for club in Club::ALL {
            assert_eq!(Club::from_code(&club.to_string()), Some(*club));
        }
    }

    #[test]
    fn categories_cover_the_bag() {
        assert_eq!(Club::Driver.category(), ClubCategory::Long);
        assert_eq!(Club::Wood3.category(), ClubCategory::Long);
        assert_eq!(Club::Iron7.category(), ClubCategory::Mid);
        assert_eq!(Club::SandWedge.category(), ClubCategory::Short);
    }
}
