//! # TakeoffKit Core
//!
//! Core types and utilities shared by the TakeoffKit crates.
//! Provides the error hierarchy, the aggregation categories, the decimal
//! precision helpers used for formulas and stored values, and the numeric
//! constants that drive interaction tolerances.

pub mod category;
pub mod constants;
pub mod error;
pub mod numeric;

pub use category::Category;
pub use error::{Error, EvaluationError, ProjectError, Result};
pub use numeric::{format_fixed, round_stored, truncate_3};
