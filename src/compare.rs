//! Regression check between two solver result files.
//!
//! A "current" run is compared against an "expected" (golden) run after both
//! are normalized, so that only the cost, the local search statistics, the
//! solution and the progress log matter, not how long the runs took.
//!
//! # Example
//!
//! ```no_run
//! use pdtsp_compare::compare::compare;
//!
//! let mut out = std::io::stdout();
//! let outcome = compare("current.json", "expected.json", &mut out).unwrap();
//! std::process::exit(outcome.exit_code().into());
//! ```

use crate::diff::{diff_values, values_equal, FieldDiff};
use crate::document::{load_document, read_raw, ResultSummary};
use crate::error::CompareError;
use crate::normalize::{normalize, NormalizeConfig};

use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Differences logged individually before the rest is only counted
pub const MAX_REPORTED_DIFFS: usize = 20;

/// Designed result of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Normalized results are equal
    Match,
    /// Normalized results differ
    Mismatch,
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Match => 0,
            Outcome::Mismatch => 1,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Match)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Match => write!(f, "MATCH"),
            Outcome::Mismatch => write!(f, "MISMATCH"),
        }
    }
}

/// Normalized forms of both results and what separates them
#[derive(Debug, Clone)]
pub struct Comparison {
    pub outcome: Outcome,
    /// Empty when the outcome is a match
    pub diffs: Vec<FieldDiff>,
    pub current: Value,
    pub expected: Value,
}

/// Load, normalize and compare two result files.
///
/// The current file is fully processed before the expected one is opened, so
/// any problem with it is reported first.
pub fn check<P, Q>(current_path: P, expected_path: Q) -> Result<Comparison, CompareError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    check_with_config(current_path, expected_path, &NormalizeConfig::default())
}

/// Same as [`check`] with a custom set of compared fields
pub fn check_with_config<P, Q>(
    current_path: P,
    expected_path: Q,
    config: &NormalizeConfig,
) -> Result<Comparison, CompareError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let current = load_normalized(current_path.as_ref(), "current", config)?;
    let expected = load_normalized(expected_path.as_ref(), "expected", config)?;

    let (outcome, diffs) = if values_equal(&current, &expected) {
        (Outcome::Match, Vec::new())
    } else {
        (Outcome::Mismatch, diff_values(&current, &expected))
    };

    Ok(Comparison {
        outcome,
        diffs,
        current,
        expected,
    })
}

/// Compare two result files and report a mismatch.
///
/// On mismatch the current file is read again and its raw content is written
/// to `out`, followed by a newline. Nothing is written on a match.
pub fn compare<P, Q, W>(
    current_path: P,
    expected_path: Q,
    out: &mut W,
) -> Result<Outcome, CompareError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    let current_path = current_path.as_ref();
    let comparison = check(current_path, expected_path.as_ref())?;

    log::info!("Comparison result: {}", comparison.outcome);

    if comparison.outcome == Outcome::Mismatch {
        log_diffs(&comparison.diffs);

        let raw = read_raw(current_path)?;
        writeln!(out, "{}", raw)?;
        out.flush()?;
    }

    Ok(comparison.outcome)
}

fn load_normalized(
    path: &Path,
    role: &str,
    config: &NormalizeConfig,
) -> Result<Value, CompareError> {
    let document = load_document(path)?;

    match ResultSummary::from_document(&document) {
        Some(summary) => log::info!("Loaded {} result {}: {}", role, path.display(), summary),
        None => log::info!("Loaded {} result {}", role, path.display()),
    }

    normalize(&document, config).map_err(|source| CompareError::Structure {
        path: path.to_path_buf(),
        source,
    })
}

fn log_diffs(diffs: &[FieldDiff]) {
    for diff in diffs.iter().take(MAX_REPORTED_DIFFS) {
        log::warn!("{}", diff);
    }
    if diffs.len() > MAX_REPORTED_DIFFS {
        log::warn!("... and {} more differences", diffs.len() - MAX_REPORTED_DIFFS);
    }
}
