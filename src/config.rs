//! A module for validating and managing configurations for the Mohr circle
//! analysis application.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::circle::Experiment;
use crate::labels::Language;
use crate::plot::{CanvasGeometry, ViewFilter};

/// Represents an error that can occur during validation of configuration data.
#[derive(Debug)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a given message.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error.
    pub fn new(message: &str) -> ValidationError {
        ValidationError {
            message: message.to_owned(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Represents the configuration for one analysis session.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub solution: Solution,
    pub canvas: Canvas,
    pub display: Display,
    pub experiments: Vec<ExperimentConfig>,
}

impl Config {
    /// Validates the entire configuration.
    ///
    /// This method checks the validity of each component of the configuration
    /// and ensures all required conditions are met. The experiment values
    /// themselves are deliberately not validated: bad pairs are absorbed by
    /// the lenient filtering of the circle builder, never rejected here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solution.validate()?;
        self.canvas.validate()?;
        self.display.validate()?;
        self.validate_filter_against_experiments()?;
        Ok(())
    }

    /// Ensures a single-test view filter points at an experiment that exists.
    fn validate_filter_against_experiments(&self) -> Result<(), ValidationError> {
        if let Some(ViewFilter::Single(index)) = ViewFilter::parse(&self.display.filter) {
            if index >= self.experiments.len() {
                return Err(ValidationError::new(&format!(
                    "filter index {} is out of range for {} experiments",
                    index,
                    self.experiments.len()
                )));
            }
        }
        Ok(())
    }

    /// The experiment snapshot handed to the numeric core.
    pub fn experiment_values(&self) -> Vec<Experiment> {
        self.experiments
            .iter()
            .map(|ex| Experiment::new(ex.s3, ex.s1))
            .collect()
    }
}

/// Represents the output settings for an analysis session.
#[derive(Debug, Deserialize)]
pub struct Solution {
    /// The desired report format. Valid values are "JSON" and "TEXT".
    pub output: String,
    /// Decimal places used when formatting the fitted parameters.
    pub decimals: usize,
}

impl Solution {
    /// Validates the `Solution` configuration.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the output format is supported and the decimal
    /// count is sensible. Otherwise returns a `ValidationError` with a
    /// detailed explanation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.output.as_str() {
            "JSON" | "TEXT" => Ok(()),
            _ => Err(ValidationError::new(&format!(
                "output must be JSON or TEXT, got {}",
                self.output
            ))),
        }?;
        if self.decimals > 10 {
            return Err(ValidationError::new(&format!(
                "decimals must be at most 10, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

/// Pixel geometry of the drawing surface.
#[derive(Debug, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Canvas {
    /// Validates the `Canvas` dimensions.
    ///
    /// The padded graph area must have a positive extent in both directions,
    /// otherwise the data-to-screen scale degenerates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ValidationError::new(&format!(
                "width must be greater than 0, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ValidationError::new(&format!(
                "height must be greater than 0, got {}",
                self.height
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ValidationError::new(&format!(
                "padding must not be negative, got {}",
                self.padding
            )));
        }
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(ValidationError::new(
                "padding leaves no room for the graph area",
            ));
        }
        Ok(())
    }

    pub fn geometry(&self) -> CanvasGeometry {
        CanvasGeometry {
            width: self.width,
            height: self.height,
            padding: self.padding,
        }
    }
}

/// Presentation settings: report language and circle view filter.
#[derive(Debug, Deserialize)]
pub struct Display {
    /// Report language. Valid values are "EN" and "TR".
    pub language: String,
    /// Which circles to draw: "all" or a zero-based test index.
    pub filter: String,
}

impl Display {
    /// Validates the `Display` configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.language.as_str() {
            "EN" | "TR" => Ok(()),
            _ => Err(ValidationError::new(&format!(
                "language must be EN or TR, got {}",
                self.language
            ))),
        }?;
        if ViewFilter::parse(&self.filter).is_none() {
            return Err(ValidationError::new(&format!(
                "filter must be 'all' or a test index, got {}",
                self.filter
            )));
        }
        Ok(())
    }

    pub fn language_value(&self) -> Language {
        match self.language.as_str() {
            "TR" => Language::Tr,
            _ => Language::En,
        }
    }

    /// The parsed view filter; validation guarantees this parses.
    pub fn view_filter(&self) -> ViewFilter {
        ViewFilter::parse(&self.filter).unwrap_or(ViewFilter::All)
    }
}

/// One triaxial test pair as configured. Values are taken as-is; physically
/// impossible pairs are dropped later by the circle builder.
#[derive(Debug, Deserialize)]
pub struct ExperimentConfig {
    pub s3: f64,
    pub s1: f64,
}

/// Loads the configuration from a YAML file.
///
/// # Arguments
///
/// * `config_path` - A path reference to the configuration file.
///
/// # Errors
///
/// Returns an error if reading or parsing the configuration file fails.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> anyhow::Result<Config> {
    let content = fs::read_to_string(config_path)?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
