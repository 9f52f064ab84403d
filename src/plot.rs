//! Maps stress space onto a canvas and lays out the drawable scene:
//! upper half-circles, the fitted envelope line and its rotated label.

use nalgebra::Point2;

use crate::circle::MohrCircle;
use crate::envelope::EnvelopeParameters;
use crate::labels::Language;

/// Colour cycle for the circles, one entry per test, reused modulo 8.
pub const PALETTE: [&str; 8] = [
    "#38bdf8", "#e879f9", "#4ade80", "#fb7185", "#facc15", "#a78bfa",
    "#2dd4bf", "#f472b6",
];

pub const ENVELOPE_COLOR: &str = "#f97316";
pub const AXIS_COLOR: &str = "#94a3b8";

/// Horizontal data extent when no circles exist, keeps the empty plot stable.
const EMPTY_EXTENT: f64 = 1000.0;

/// Which circles the renderer draws. The regression never sees this, it
/// always runs over the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    All,
    Single(usize),
}

impl ViewFilter {
    pub fn admits(&self, index: usize) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Single(i) => *i == index,
        }
    }

    /// Parses the config form: `"all"` or a zero-based circle index.
    pub fn parse(raw: &str) -> Option<ViewFilter> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            Some(ViewFilter::All)
        } else {
            raw.parse::<usize>().ok().map(ViewFilter::Single)
        }
    }
}

/// Pixel geometry of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// Affine map from stress space to screen space. The origin sits at the
/// bottom-left padding corner and the y axis points up in data terms.
#[derive(Debug, Clone, Copy)]
pub struct Mapper {
    scale: f64,
    zero: Point2<f64>,
    /// Horizontal data extent: 1.2x the largest axial stress drawn.
    pub max_x: f64,
}

impl Mapper {
    pub fn new(geometry: &CanvasGeometry, circles: &[MohrCircle]) -> Mapper {
        let max_x = if circles.is_empty() {
            EMPTY_EXTENT
        } else {
            circles.iter().map(|c| c.s1).fold(0.0, f64::max) * 1.2
        };

        let graph_w = geometry.width - 2.0 * geometry.padding;
        let graph_h = geometry.height - 2.0 * geometry.padding;
        // The vertical extent is held at 0.6x the horizontal one so the
        // half-circles stay visually readable.
        let scale = (graph_w / max_x).min(graph_h / (max_x * 0.6));

        Mapper {
            scale,
            zero: Point2::new(geometry.padding, geometry.height - geometry.padding),
            max_x,
        }
    }

    pub fn to_screen(&self, sigma: f64, tau: f64) -> Point2<f64> {
        Point2::new(
            self.zero.x + sigma * self.scale,
            self.zero.y - tau * self.scale,
        )
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
}

/// An upper half-circle arc in screen coordinates plus its center marker.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfArc {
    pub center: Point2<f64>,
    pub radius_px: f64,
    pub color: &'static str,
}

/// The envelope line label, rotated to follow the line's slope.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeLabel {
    pub position: Point2<f64>,
    pub rotation_deg: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeLine {
    pub segment: Segment,
    pub label: EnvelopeLabel,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub text: String,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub x_axis: Segment,
    pub y_axis: Segment,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub arcs: Vec<HalfArc>,
    pub envelope: Option<EnvelopeLine>,
    pub legend: Vec<LegendEntry>,
}

/// Lays out the full scene for one recompute pass.
pub fn build_scene(
    geometry: &CanvasGeometry,
    circles: &[MohrCircle],
    params: Option<&EnvelopeParameters>,
    filter: ViewFilter,
    language: Language,
) -> Scene {
    let mapper = Mapper::new(geometry, circles);
    let zero = mapper.to_screen(0.0, 0.0);

    let x_axis = Segment {
        from: zero,
        to: Point2::new(geometry.width - geometry.padding / 2.0, zero.y),
    };
    let y_axis = Segment {
        from: zero,
        to: Point2::new(zero.x, geometry.padding / 2.0),
    };

    let arcs = circles
        .iter()
        .enumerate()
        .filter(|(index, _)| filter.admits(*index))
        .map(|(index, circle)| HalfArc {
            center: mapper.to_screen(circle.center, 0.0),
            radius_px: circle.radius * mapper.scale(),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect();

    let envelope = params
        .filter(|p| p.valid)
        .map(|p| envelope_line(&mapper, p));

    let mut legend: Vec<LegendEntry> = circles
        .iter()
        .enumerate()
        .map(|(index, _)| LegendEntry {
            color: PALETTE[index % PALETTE.len()],
            text: format!("{} {}", language.test_label(), index + 1),
        })
        .collect();
    legend.push(LegendEntry {
        color: ENVELOPE_COLOR,
        text: language.legend_envelope().to_string(),
    });

    Scene {
        x_axis,
        y_axis,
        x_axis_label: language.axis_x().to_string(),
        y_axis_label: language.axis_y().to_string(),
        arcs,
        envelope,
        legend,
    }
}

fn envelope_line(mapper: &Mapper, params: &EnvelopeParameters) -> EnvelopeLine {
    let tan_phi = params.phi.to_radians().tan();

    let segment = Segment {
        from: mapper.to_screen(0.0, params.c),
        to: mapper.to_screen(mapper.max_x, params.c + mapper.max_x * tan_phi),
    };

    // Label pinned at 60% of the horizontal extent, on the line itself.
    let label_sigma = mapper.max_x * 0.6;
    let label = EnvelopeLabel {
        position: mapper.to_screen(label_sigma, params.c + label_sigma * tan_phi),
        rotation_deg: -params.phi,
        text: format!("τ = {:.1} + σ tan({:.1}°)", params.c, params.phi),
    };

    EnvelopeLine {
        segment,
        label,
        color: ENVELOPE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::{build_circles, Experiment};
    use crate::envelope::estimate_envelope;
    use approx::assert_relative_eq;

    const GEOMETRY: CanvasGeometry = CanvasGeometry {
        width: 900.0,
        height: 600.0,
        padding: 60.0,
    };

    fn sample_circles() -> Vec<crate::circle::MohrCircle> {
        build_circles(&[
            Experiment::new(100.0, 403.99),
            Experiment::new(210.0, 675.81),
            Experiment::new(330.0, 924.19),
        ])
    }

    #[test]
    fn test_empty_plot_uses_default_extent() {
        let mapper = Mapper::new(&GEOMETRY, &[]);
        assert_relative_eq!(mapper.max_x, 1000.0);
        assert!(mapper.scale() > 0.0);
    }

    #[test]
    fn test_extent_covers_largest_circle() {
        let circles = sample_circles();
        let mapper = Mapper::new(&GEOMETRY, &circles);
        assert_relative_eq!(mapper.max_x, 924.19 * 1.2, epsilon = 1e-9);
        // Every circle's far edge (sigma = s1) lands inside the graph area.
        for circle in &circles {
            let edge = mapper.to_screen(circle.s1, 0.0);
            assert!(edge.x <= GEOMETRY.width - GEOMETRY.padding + 1e-9);
        }
    }

    #[test]
    fn test_origin_maps_to_padding_corner() {
        let mapper = Mapper::new(&GEOMETRY, &[]);
        let zero = mapper.to_screen(0.0, 0.0);
        assert_relative_eq!(zero.x, GEOMETRY.padding);
        assert_relative_eq!(zero.y, GEOMETRY.height - GEOMETRY.padding);
    }

    #[test]
    fn test_filter_selects_drawn_arcs() {
        let circles = sample_circles();
        let params = estimate_envelope(&circles);
        let scene = build_scene(
            &GEOMETRY,
            &circles,
            params.as_ref(),
            ViewFilter::Single(1),
            Language::En,
        );
        assert_eq!(scene.arcs.len(), 1);
        assert_eq!(scene.arcs[0].color, PALETTE[1]);
        // Legend still lists every test plus the envelope.
        assert_eq!(scene.legend.len(), circles.len() + 1);
    }

    #[test]
    fn test_envelope_line_and_label() {
        let circles = sample_circles();
        let params = estimate_envelope(&circles).unwrap();
        let scene = build_scene(
            &GEOMETRY,
            &circles,
            Some(&params),
            ViewFilter::All,
            Language::En,
        );
        let envelope = scene.envelope.expect("valid fit draws an envelope");
        assert_relative_eq!(envelope.label.rotation_deg, -params.phi);
        assert_eq!(envelope.label.text, "τ = 61.6 + σ tan(22.8°)");

        let mapper = Mapper::new(&GEOMETRY, &circles);
        let intercept = mapper.to_screen(0.0, params.c);
        assert_relative_eq!(envelope.segment.from.y, intercept.y);
    }

    #[test]
    fn test_no_envelope_without_valid_fit() {
        let scene = build_scene(&GEOMETRY, &[], None, ViewFilter::All, Language::En);
        assert!(scene.envelope.is_none());
        assert!(scene.arcs.is_empty());
        assert_eq!(scene.legend.len(), 1);
    }

    #[test]
    fn test_view_filter_parsing() {
        assert_eq!(ViewFilter::parse("all"), Some(ViewFilter::All));
        assert_eq!(ViewFilter::parse("ALL "), Some(ViewFilter::All));
        assert_eq!(ViewFilter::parse("2"), Some(ViewFilter::Single(2)));
        assert_eq!(ViewFilter::parse("x"), None);
    }
}
