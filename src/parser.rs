//! CSV input for triaxial test pairs.

use anyhow::Result;
use std::path::Path;

use crate::circle::{coerce_stress, Experiment};

/// Reads `(s3, s1)` pairs from a CSV file with a header row.
///
/// Field values go through the same lenient coercion as the interactive
/// inputs: anything that does not parse as a finite number becomes `0.0`.
/// Only structural I/O problems (missing file, ragged records) are errors.
pub fn read_experiments_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Experiment>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut experiments = Vec::new();

    for record in reader.records() {
        let record = record?;
        let s3 = coerce_stress(record.get(0).unwrap_or(""));
        let s1 = coerce_stress(record.get(1).unwrap_or(""));
        experiments.push(Experiment::new(s3, s1));
    }

    Ok(experiments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::build_circles;
    use approx::assert_relative_eq;

    #[test]
    fn test_read_experiments_from_csv() {
        let experiments =
            read_experiments_from_csv("tests/experiments.csv").expect("Failed to read CSV");
        assert_eq!(experiments.len(), 4);
        assert_relative_eq!(experiments[0].s3, 100.0);
        assert_relative_eq!(experiments[0].s1, 403.99);

        // The malformed last row coerces to (0, 0) and is later dropped by
        // the circle builder, not rejected by the parser.
        assert_relative_eq!(experiments[3].s3, 0.0);
        assert_relative_eq!(experiments[3].s1, 0.0);
        assert_eq!(build_circles(&experiments).len(), 3);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_experiments_from_csv("tests/does-not-exist.csv").is_err());
    }
}
