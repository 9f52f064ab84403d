//! Display labels for the two supported languages.

use serde::{Deserialize, Serialize};

/// Report and plot language. The tool shipped bilingual (Turkish lab UI
/// with an English toggle) and both label sets are kept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    En,
    Tr,
}

impl Language {
    /// The other language, as driven by the UI toggle button.
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::En,
        }
    }

    pub fn results_title(self) -> &'static str {
        match self {
            Language::En => "Result Parameters",
            Language::Tr => "Sonuç parametreleri",
        }
    }

    pub fn cohesion(self) -> &'static str {
        match self {
            Language::En => "Cohesion (c)",
            Language::Tr => "Kohezyon (c)",
        }
    }

    pub fn friction(self) -> &'static str {
        match self {
            Language::En => "Internal Friction (ϕ)",
            Language::Tr => "İçsel Sürtünme (ϕ)",
        }
    }

    pub fn unit_degree(self) -> &'static str {
        match self {
            Language::En => "degrees",
            Language::Tr => "derece",
        }
    }

    pub fn axis_x(self) -> &'static str {
        match self {
            Language::En => "Normal Stress σ (kPa)",
            Language::Tr => "Normal Gerilme σ (kPa)",
        }
    }

    pub fn axis_y(self) -> &'static str {
        match self {
            Language::En => "Shear Stress τ (kPa)",
            Language::Tr => "Kayma Gerilmesi τ (kPa)",
        }
    }

    pub fn legend_envelope(self) -> &'static str {
        match self {
            Language::En => "Failure Envelope",
            Language::Tr => "Göçme Zarfı",
        }
    }

    pub fn test_label(self) -> &'static str {
        match self {
            Language::En => "Test",
            Language::Tr => "Deney",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::En.toggled(), Language::Tr);
        assert_eq!(Language::Tr.toggled().toggled(), Language::Tr);
    }

    #[test]
    fn test_labels_differ_per_language() {
        assert_ne!(Language::En.axis_x(), Language::Tr.axis_x());
        assert_ne!(
            Language::En.legend_envelope(),
            Language::Tr.legend_envelope()
        );
    }
}
