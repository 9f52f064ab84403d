//! Mohr circle construction from triaxial test pairs.

use serde::{Deserialize, Serialize};

/// A single triaxial test result in consistent pressure units (e.g. kPa).
///
/// `s3` is the confining (minor principal) stress, `s1` the axial
/// (major principal) stress at failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub s3: f64,
    pub s1: f64,
}

impl Experiment {
    pub fn new(s3: f64, s1: f64) -> Self {
        Experiment { s3, s1 }
    }
}

/// A Mohr circle derived from one experiment.
///
/// Only exists for pairs with `s1 > s3`, so `radius` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MohrCircle {
    pub s3: f64,
    pub s1: f64,
    pub center: f64,
    pub radius: f64,
}

impl MohrCircle {
    /// Builds the circle for one experiment, or `None` when the pair is
    /// physically degenerate (`s1 <= s3`). Non-finite stresses are read
    /// as `0.0` first, matching the lenient input policy of the tool.
    pub fn from_experiment(ex: &Experiment) -> Option<MohrCircle> {
        let s3 = finite_or_zero(ex.s3);
        let s1 = finite_or_zero(ex.s1);
        if s1 > s3 {
            Some(MohrCircle {
                s3,
                s1,
                center: (s1 + s3) / 2.0,
                radius: (s1 - s3) / 2.0,
            })
        } else {
            None
        }
    }
}

/// Converts experiments to circles, preserving input order and silently
/// dropping invalid pairs. Order matters downstream for colour and legend
/// assignment.
pub fn build_circles(experiments: &[Experiment]) -> Vec<MohrCircle> {
    experiments.iter().filter_map(MohrCircle::from_experiment).collect()
}

/// Lenient stress parsing for text inputs: anything that is not a finite
/// number becomes `0.0`. Bad input is never an error here, a zeroed pair
/// simply fails the `s1 > s3` filter later.
pub fn coerce_stress(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
