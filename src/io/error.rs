//! Error types for quiz generation and image compositing operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum QuizError {
    /// Input text produced no sentences at all
    ///
    /// Fatal for the run: nothing can be blanked, sampled or formatted
    /// without at least one sentence.
    EmptyContext,

    /// No selected sentence offered a non-punctuation token to blank
    ///
    /// Raised after every sentence has been visited once without finding
    /// an eligible token. Skips the affected question only.
    InsufficientContent {
        /// Number of sentences visited before giving up
        attempts: usize,
    },

    /// A without-replacement sample requested more values than exist
    InsufficientOptions {
        /// Number of values requested
        requested: usize,
        /// Number of values actually available
        available: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Which parameter was rejected
        parameter: &'static str,
        /// The rejected value rendered as text
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// File the loader tried to open
        path: PathBuf,
        /// Decoder error reported by the image crate
        source: image::ImageError,
    },

    /// Failed to save a result image to disk
    ImageSave {
        /// Destination the encoder tried to write
        path: PathBuf,
        /// Encoder error reported by the image crate
        source: image::ImageError,
    },

    /// A filesystem step around quiz or image output failed
    FileSystem {
        /// File or directory the operation touched
        path: PathBuf,
        /// Short verb naming the operation, such as read or write
        operation: &'static str,
        /// Raw error reported by std
        source: std::io::Error,
    },

    /// Reading an interactive prompt from standard input failed
    Prompt {
        /// The prompt label being answered
        prompt: &'static str,
        /// Raw stdin error
        source: std::io::Error,
    },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContext => {
                write!(f, "Context contains no sentences")
            }
            Self::InsufficientContent { attempts } => {
                write!(
                    f,
                    "No sentence with a non-punctuation token found after {attempts} attempts"
                )
            }
            Self::InsufficientOptions {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Requested {requested} distinct options but only {available} are available"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid {parameter} '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Could not open image '{}': {source}", path.display())
            }
            Self::ImageSave { path, source } => {
                write!(f, "Could not save image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(f, "Could not {operation} '{}': {source}", path.display())
            }
            Self::Prompt { prompt, source } => {
                write!(f, "Failed to read input for prompt '{prompt}': {source}")
            }
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageSave { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Prompt { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, QuizError>;

impl From<image::ImageError> for QuizError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unspecified>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unspecified>"),
            operation: "access",
            source: err,
        }
    }
}

/// Shorthand for rejecting a parameter with a printable value and reason
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuizError {
    QuizError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a concrete path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> QuizError {
    QuizError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
