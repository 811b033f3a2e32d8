//! Error types for puzzle generation and the command-line shell

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// A word failed validation during word-list construction
    InvalidWord {
        /// The offending word as supplied by the caller
        word: String,
        /// Explanation of why the word was rejected
        reason: &'static str,
    },

    /// The caller supplied a word list with no entries
    EmptyWordList,

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No built-in theme matches the requested name
    UnknownTheme {
        /// The name that failed to resolve
        name: String,
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

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { word, reason } => {
                write!(f, "Invalid word '{word}': {reason}")
            }
            Self::EmptyWordList => {
                write!(f, "Word list contains no entries")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownTheme { name } => {
                write!(f, "No built-in theme named '{name}'")
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

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a word validation error
pub const fn invalid_word(word: String, reason: &'static str) -> PuzzleError {
    PuzzleError::InvalidWord { word, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_formatting() {
        let err = invalid_parameter("width", &0, &"must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
    }

    #[test]
    fn test_file_system_error_exposes_source() {
        let err = PuzzleError::FileSystem {
            path: PathBuf::from("words.txt"),
            operation: "read word list",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("read word list"));
    }
}
