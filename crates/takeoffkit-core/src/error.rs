//! Error handling for TakeoffKit
//!
//! Provides the error types for the core layers:
//! - Evaluation errors (formula parsing/evaluation)
//! - Project errors (project file conversion and page store integrity)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;
use uuid::Uuid;

/// Expression evaluation error type
///
/// Raised by the restricted arithmetic evaluator when an expression is
/// malformed or uses syntax outside the allowed subset. Value derivation
/// catches it and treats the text as a plain memo.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Expression is empty or whitespace only
    #[error("Empty expression")]
    Empty,

    /// Expression does not parse
    #[error("Invalid expression syntax: {message}")]
    Syntax {
        /// What the parser expected or found.
        message: String,
    },

    /// A character that starts no token
    #[error("Unexpected character '{ch}'")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },

    /// A string or other non-numeric literal
    #[error("Only numeric literals are allowed")]
    NonNumericLiteral,

    /// A bare identifier (variables are not supported)
    #[error("Variables are not allowed: {name}")]
    Variable {
        /// The identifier that was referenced.
        name: String,
    },

    /// A call to a function other than `sqrt`
    #[error("Function not allowed: {name}")]
    DisallowedFunction {
        /// The function name.
        name: String,
    },

    /// An operator outside `+ - * / ^`
    #[error("Operator not allowed: {op}")]
    DisallowedOperator {
        /// The operator text.
        op: String,
    },

    /// Function called with the wrong number of arguments
    #[error("{name}() takes exactly {expected} argument(s), got {found}")]
    ArgumentCount {
        /// The function name.
        name: String,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },

    /// No real result exists (sqrt of a negative, fractional power of a negative)
    #[error("Math domain error: {message}")]
    Domain {
        /// Description of the failing operation.
        message: String,
    },
}

/// Project error type
///
/// Represents errors converting persisted project records into shapes and
/// integrity violations in the page store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    /// Shape record names an unknown variant
    #[error("Unknown shape type: {shape_type}")]
    UnknownShapeType {
        /// The type tag found in the record.
        shape_type: String,
    },

    /// Triangle record without exactly three points
    #[error("Triangle {id} must have exactly 3 points, found {found}")]
    TrianglePoints {
        /// The shape id.
        id: Uuid,
        /// Number of points present.
        found: usize,
    },

    /// Two shapes share an id
    #[error("Duplicate shape id: {id}")]
    DuplicateShapeId {
        /// The repeated id.
        id: Uuid,
    },

    /// Referenced shape does not exist
    #[error("Shape not found: {id}")]
    ShapeNotFound {
        /// The missing id.
        id: Uuid,
    },

    /// Slope multiplier is not a positive finite number
    #[error("Invalid slope {value}: must be a positive finite number")]
    InvalidSlope {
        /// The rejected value.
        value: f64,
    },
}

/// Main error type for TakeoffKit
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Evaluation error
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// Project error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an evaluation error
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Error::Evaluation(_))
    }

    /// Check if this is a project error
    pub fn is_project_error(&self) -> bool {
        matches!(self, Error::Project(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
