//! A module for the main application logic of the Mohr analysis tool.

use anyhow::Result;

use crate::circle::build_circles;
use crate::config::load_config;
use crate::envelope::estimate_envelope;
use crate::plot::build_scene;
use crate::report::AnalysisReport;

pub fn run(config_path: &str) -> Result<()> {
    let conf = load_config(config_path)?;
    conf.validate()?;

    let experiments = conf.experiment_values();
    let circles = build_circles(&experiments);
    let params = estimate_envelope(&circles);

    let language = conf.display.language_value();
    let scene = build_scene(
        &conf.canvas.geometry(),
        &circles,
        params.as_ref(),
        conf.display.view_filter(),
        language,
    );
    let report = AnalysisReport::new(circles, params, conf.solution.decimals);

    match conf.solution.output.as_str() {
        "JSON" => println!("{}", report.to_json()?),
        _ => {
            print!("{}", report.render_text(language));
            if let Some(envelope) = &scene.envelope {
                println!("{}", envelope.label.text);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_fixture_config() {
        assert!(run("tests/config.yaml").is_ok());
    }

    #[test]
    fn test_run_with_missing_config_fails() {
        assert!(run("tests/no-such-config.yaml").is_err());
    }
}
