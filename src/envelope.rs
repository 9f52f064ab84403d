//! Least-squares fit of the Mohr-Coulomb failure envelope.

use crate::circle::MohrCircle;
use serde::Serialize;

/// Fitted Mohr-Coulomb parameters.
///
/// `c` is the cohesion in stress units, `phi` the internal friction angle in
/// degrees. The raw regression slope `m` and intercept `b` are kept for
/// diagnostics. When `valid` is false every numeric field is zeroed so the
/// caller can still format a "no result" row without null checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvelopeParameters {
    pub c: f64,
    pub phi: f64,
    pub m: f64,
    pub b: f64,
    pub valid: bool,
}

impl EnvelopeParameters {
    fn invalid() -> Self {
        EnvelopeParameters {
            c: 0.0,
            phi: 0.0,
            m: 0.0,
            b: 0.0,
            valid: false,
        }
    }
}

/// Fits the failure envelope to a set of Mohr circles.
///
/// Per Mohr-Coulomb theory the circle radius relates linearly to the circle
/// center: `radius = sin(phi) * center + c * cos(phi)`. A straight-line fit
/// over the `(center, radius)` points therefore recovers both parameters.
///
/// Returns `None` for fewer than two circles (a line needs two points), and
/// an invalid result when the fitted slope is not a usable sine: outside
/// `(-1, 1)`, or undefined because every center coincides. A pure function,
/// calling it twice on the same input yields identical output.
pub fn estimate_envelope(circles: &[MohrCircle]) -> Option<EnvelopeParameters> {
    if circles.len() < 2 {
        return None;
    }

    let n = circles.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for circle in circles {
        let x = circle.center;
        let y = circle.radius;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    // Zero variance in the centers makes the slope undefined.
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Some(EnvelopeParameters::invalid());
    }

    let m = (n * sum_xy - sum_x * sum_y) / denominator;
    let b = (sum_y - m * sum_x) / n;

    // m = sin(phi), so it must lie strictly inside (-1, 1). The open bound
    // also rejects phi = +-90 degrees, where cos(phi) = 0 would blow up the
    // cohesion below.
    if !m.is_finite() || m.abs() >= 1.0 {
        return Some(EnvelopeParameters::invalid());
    }

    let phi_rad = m.asin();
    Some(EnvelopeParameters {
        c: b / phi_rad.cos(),
        phi: phi_rad.to_degrees(),
        m,
        b,
        valid: true,
    })
}
