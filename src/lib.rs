//! PD-TSP Result Comparator Library
//! 
//! Regression oracle for Pickup and Delivery TSP solvers: two JSON result
//! files are compared on their run-independent content only.
//! 
//! # Features
//! 
//! - Loading of solver output as generic JSON, with a typed summary for reporting
//! - Normalization keeping `cost`, `educate`, `solution` and `evolution`,
//!   without the per-iteration `time`
//! - Deep comparison with numeric equality and order-sensitive sequences
//! - Field-level difference listing with JSON pointer paths
//! 
//! # Example
//! 
//! ```no_run
//! use pdtsp_compare::compare::{check, Outcome};
//! 
//! let comparison = check("current.json", "expected.json").unwrap();
//! if comparison.outcome == Outcome::Mismatch {
//!     for diff in &comparison.diffs {
//!         println!("{}", diff);
//!     }
//! }
//! ```

pub mod error;
pub mod document;
pub mod normalize;
pub mod diff;
pub mod compare;

pub use compare::{check, compare, Comparison, Outcome};
pub use error::{CompareError, StructureError};
