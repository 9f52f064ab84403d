//! Result formatting: JSON and plain-text renderings of one analysis pass.

use anyhow::Result;
use serde::Serialize;

use crate::circle::MohrCircle;
use crate::envelope::EnvelopeParameters;
use crate::labels::Language;

/// Shown in place of a number when no valid envelope exists.
pub const PLACEHOLDER: &str = "--";

/// The outcome of one recompute pass, ready for serialization.
///
/// `cohesion` and `friction` carry the fixed-decimal display strings the UI
/// shows, falling back to `"--"` when the fit is absent or invalid.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub circles: Vec<MohrCircle>,
    pub envelope: Option<EnvelopeParameters>,
    pub cohesion: String,
    pub friction: String,
}

impl AnalysisReport {
    pub fn new(
        circles: Vec<MohrCircle>,
        envelope: Option<EnvelopeParameters>,
        decimals: usize,
    ) -> Self {
        let (cohesion, friction) = match &envelope {
            Some(p) if p.valid => (fixed(p.c, decimals), fixed(p.phi, decimals)),
            _ => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
        };
        AnalysisReport {
            circles,
            envelope,
            cohesion,
            friction,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering in the requested language.
    pub fn render_text(&self, language: Language) -> String {
        let mut out = String::new();
        out.push_str(language.results_title());
        out.push('\n');
        for (index, circle) in self.circles.iter().enumerate() {
            out.push_str(&format!(
                "{} {}: σ3 = {}, σ1 = {}, center = {}, radius = {}\n",
                language.test_label(),
                index + 1,
                circle.s3,
                circle.s1,
                circle.center,
                circle.radius
            ));
        }
        out.push_str(&format!("{}: {} kPa\n", language.cohesion(), self.cohesion));
        out.push_str(&format!(
            "{}: {} {}\n",
            language.friction(),
            self.friction,
            language.unit_degree()
        ));
        out
    }
}

/// Fixed-decimal display formatting, e.g. `fixed(61.5689, 2) == "61.57"`.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::{build_circles, Experiment};
    use crate::envelope::estimate_envelope;

    fn sample() -> (Vec<MohrCircle>, Option<EnvelopeParameters>) {
        let circles = build_circles(&[
            Experiment::new(100.0, 403.99),
            Experiment::new(210.0, 675.81),
            Experiment::new(330.0, 924.19),
        ]);
        let params = estimate_envelope(&circles);
        (circles, params)
    }

    #[test]
    fn test_valid_fit_formats_fixed_decimals() {
        let (circles, params) = sample();
        let report = AnalysisReport::new(circles, params, 2);
        assert_eq!(report.cohesion, "61.57");
        assert_eq!(report.friction, "22.77");
    }

    #[test]
    fn test_absent_fit_shows_placeholders() {
        let report = AnalysisReport::new(Vec::new(), None, 2);
        assert_eq!(report.cohesion, PLACEHOLDER);
        assert_eq!(report.friction, PLACEHOLDER);
    }

    #[test]
    fn test_invalid_fit_shows_placeholders() {
        let circles = build_circles(&[
            Experiment::new(100.0, 310.0),
            Experiment::new(100.0, 310.0),
        ]);
        let params = estimate_envelope(&circles);
        assert!(params.is_some_and(|p| !p.valid));
        let report = AnalysisReport::new(circles, params, 2);
        assert_eq!(report.cohesion, PLACEHOLDER);
        assert_eq!(report.friction, PLACEHOLDER);
    }

    #[test]
    fn test_json_contains_core_fields() {
        let (circles, params) = sample();
        let report = AnalysisReport::new(circles, params, 2);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"circles\""));
        assert!(json.contains("\"envelope\""));
        assert!(json.contains("\"valid\": true"));
    }

    #[test]
    fn test_text_rendering_uses_language() {
        let (circles, params) = sample();
        let report = AnalysisReport::new(circles, params, 2);
        let tr = report.render_text(Language::Tr);
        assert!(tr.contains("Kohezyon (c): 61.57 kPa"));
        assert!(tr.contains("derece"));
        let en = report.render_text(Language::En);
        assert!(en.contains("Cohesion (c): 61.57 kPa"));
    }
}
