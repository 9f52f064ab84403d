// src/lib.rs

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub mod app_logic;
pub mod circle;
pub mod config;
pub mod envelope;
pub mod labels;
pub mod parser;
pub mod plot;
pub mod report;

// When the "wasm" feature is enabled, expose the full analysis pass to the
// host environment as one flat call.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn analyze(stresses: &[f64]) -> Vec<f64> {
    // Interleaved (s3, s1) pairs in, [c, phi_deg, valid] out. A trailing odd
    // value is ignored.
    let experiments: Vec<circle::Experiment> = stresses
        .chunks_exact(2)
        .map(|pair| circle::Experiment::new(pair[0], pair[1]))
        .collect();
    let circles = circle::build_circles(&experiments);
    match envelope::estimate_envelope(&circles) {
        Some(p) if p.valid => vec![p.c, p.phi, 1.0],
        _ => vec![0.0, 0.0, 0.0],
    }
}
