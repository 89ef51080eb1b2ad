//! Loading of solver result files.
//!
//! The PDP solvers print one JSON document per run:
//!
//! ```text
//! {
//!   "version": "1.2",
//!   "cost": 4512,
//!   "time": 12.03,
//!   "educate": 8821,
//!   "solution": [0, 4, 2, 7, ...],
//!   "evolution": [
//!     { "iteration": 1, "time": 0.01, "cost": 5120 },
//!     ...
//!   ]
//! }
//! ```
//!
//! Comparison works on the generic [`serde_json::Value`] so that unknown or
//! solver-specific fields never break loading. [`ResultSummary`] is a lenient
//! typed view used only for reporting.

use crate::error::CompareError;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Read and parse a single JSON document.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value, CompareError> {
    let path = path.as_ref();
    let text = read_raw(path)?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());

    serde_json::from_str(&text).map_err(|source| CompareError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the unmodified text of a result file
pub fn read_raw<P: AsRef<Path>>(path: P) -> Result<String, CompareError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One progress snapshot recorded by the solver
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvolutionEntry {
    /// Iteration (or improvement) counter
    pub iteration: Option<u64>,
    /// Elapsed seconds when the snapshot was taken
    pub time: Option<f64>,
    /// Best cost known at that point
    pub cost: Option<f64>,
}

/// Typed view of a solver result, for reporting
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResultSummary {
    /// Solver build version
    pub version: Option<String>,
    /// Final solution cost
    pub cost: Option<f64>,
    /// Total run time in seconds
    pub time: Option<f64>,
    /// Local search statistics; a counter for some solvers, a record for others
    pub educate: Option<Value>,
    /// Computed route
    pub solution: Option<Value>,
    pub evolution: Vec<EvolutionEntry>,
}

impl ResultSummary {
    /// Build the summary from a loaded document.
    ///
    /// Returns `None` when the document does not look like solver output at
    /// all; this never fails a comparison.
    pub fn from_document(document: &Value) -> Option<Self> {
        Self::deserialize(document).ok()
    }

    /// Lowest cost recorded in the evolution log
    pub fn best_cost(&self) -> Option<f64> {
        self.evolution
            .iter()
            .filter_map(|e| e.cost)
            .fold(None, |best, c| Some(best.map_or(c, |b: f64| b.min(c))))
    }

    /// Number of visits in the solution, when it is a plain sequence
    pub fn solution_len(&self) -> Option<usize> {
        self.solution.as_ref().and_then(Value::as_array).map(Vec::len)
    }
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "version {}", self.version.as_deref().unwrap_or("?"))?;
        match self.cost {
            Some(cost) => write!(f, ", cost {}", cost)?,
            None => write!(f, ", no cost")?,
        }
        if let Some(time) = self.time {
            write!(f, ", time {:.4}s", time)?;
        }
        if let Some(len) = self.solution_len() {
            write!(f, ", {} visits", len)?;
        }
        write!(f, ", {} evolution entries", self.evolution.len())?;
        if let Some(best) = self.best_cost() {
            write!(f, " (best {})", best)?;
        }
        Ok(())
    }
}
