// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the posture classifier.

use std::fmt;

/// Result type alias for posture operations.
pub type Result<T> = std::result::Result<T, PoseError>;

/// Main error type for the posture classifier.
#[derive(Debug)]
pub enum PoseError {
    /// Skeleton or joint data that cannot be classified (wrong joint count, non-finite values).
    InvalidInput(String),
    /// Invalid classifier configuration provided.
    ConfigError(String),
    /// Malformed pose frame record.
    ParseError {
        /// 1-based line number in the input.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// Pose source could not be opened or read.
    SourceError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ParseError { line, message } => {
                write!(f, "Parse error on line {line}: {message}")
            }
            Self::SourceError(msg) => write!(f, "Source error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PoseError::InvalidInput("test".to_string());
        assert_eq!(err.to_string(), "Invalid input: test");

        let err = PoseError::ParseError {
            line: 3,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error on line 3: bad");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = PoseError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(PoseError::ConfigError("x".to_string()).source().is_none());
    }
}
