//! Skill tiers and shot shapes — the stochastic knobs of generation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Player proficiency tier. Scales club baselines up or down and controls
/// how widely outcomes spread around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Novice,
    Intermediate,
    Expert,
}

impl SkillTier {
    /// Baseline scaling factor.
    pub fn multiplier(self) -> f64 {
        match self {
            SkillTier::Novice => 0.8,
            SkillTier::Intermediate => 1.0,
            SkillTier::Expert => 1.2,
        }
    }

    /// Relative spread of outcomes around the scaled baseline. Always small
    /// enough that perturbed values stay positive.
    pub fn variance(self) -> f64 {
        match self {
            SkillTier::Novice => 0.25,
            SkillTier::Intermediate => 0.15,
            SkillTier::Expert => 0.05,
        }
    }

    /// Shot-shape selection weights, indexed like `ShotShape::ALL`.
    ///
    /// Experts never slice or hook; novices spray every shape equally.
    pub fn shape_weights(self) -> [f64; 5] {
        match self {
            SkillTier::Novice => [20.0, 20.0, 20.0, 20.0, 20.0],
            SkillTier::Intermediate => [40.0, 25.0, 25.0, 5.0, 5.0],
            SkillTier::Expert => [60.0, 20.0, 20.0, 0.0, 0.0],
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Novice => write!(f, "novice"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

/// Categorical classification of the ball's curved flight.
///
/// Fades and slices bend right (positive curvature), draws and hooks bend
/// left (negative). Slices and hooks are the severe versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotShape {
    Straight,
    Fade,
    Draw,
    Slice,
    Hook,
}

impl ShotShape {
    /// All shapes, in weight-table order.
    pub const ALL: &[ShotShape] = &[
        ShotShape::Straight,
        ShotShape::Fade,
        ShotShape::Draw,
        ShotShape::Slice,
        ShotShape::Hook,
    ];

    /// Draw a lateral curvature (meters of bend at full carry) consistent
    /// with this shape. Gentle shapes bend 2-10 m, severe ones 10-30 m.
    pub fn curvature(self, rng: &mut impl Rng) -> f64 {
        match self {
            ShotShape::Straight => 0.0,
            ShotShape::Fade => rng.gen_range(2.0..10.0),
            ShotShape::Draw => -rng.gen_range(2.0..10.0),
            ShotShape::Slice => rng.gen_range(10.0..30.0),
            ShotShape::Hook => -rng.gen_range(10.0..30.0),
        }
    }
}
