//! Error types and context management for map generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cell index outside the grid
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of cells in the grid
        total_size: usize,
    },

    /// Candidate narrowing left no legal shape for a cell
    ///
    /// Cannot occur with a complete catalog of positive weights; surfaced
    /// as a hard failure of the attempt rather than papered over.
    NoCandidates {
        /// Cell being placed when narrowing emptied
        index: usize,
        /// Generation attempt (1-based, 0 when unknown)
        attempt: usize,
    },

    /// Every allowed attempt produced a map below the minimum size
    AttemptsExhausted {
        /// Attempts made before giving up
        attempts: usize,
        /// Required number of placed tiles
        min_size: usize,
        /// Largest placed count produced by any attempt
        best: usize,
    },

    /// A finished map breaks a connectivity or boundary invariant
    InvariantViolation {
        /// Number of violations found
        count: usize,
        /// Description of the first violation
        first: String,
    },

    /// Text map could not be parsed back into a grid
    ParseMap {
        /// 1-based line number of the problem
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IndexOutOfRange { index, total_size } => {
                write!(f, "Cell index {index} is out of range (grid has {total_size} cells)")
            }
            Self::NoCandidates { index, attempt } => {
                write!(
                    f,
                    "No legal tile shape for cell {index} during attempt {attempt}"
                )
            }
            Self::AttemptsExhausted {
                attempts,
                min_size,
                best,
            } => {
                write!(
                    f,
                    "Gave up after {attempts} attempts: no map reached {min_size} tiles (largest was {best})"
                )
            }
            Self::InvariantViolation { count, first } => {
                write!(f, "Map breaks {count} invariant(s), first: {first}")
            }
            Self::ParseMap { line, reason } => {
                write!(f, "Malformed map on line {line}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Generation attempt in progress
    pub attempt: Option<usize>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with generation state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the attempt number
    ///
    /// # Errors
    ///
    /// Propagates the original error with the attempt context applied
    fn with_attempt(self, attempt: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GenerationError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only placement failures carry attempt state
            if let GenerationError::NoCandidates { attempt, .. } = &mut error {
                if let Some(current) = context.attempt {
                    *attempt = current;
                }
            }
            error
        })
    }

    fn with_attempt(self, attempt: usize) -> Result<T> {
        self.with_context(ErrorContext {
            attempt: Some(attempt),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
