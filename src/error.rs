//! Error types for binding and dispatch

use thiserror::Error;

/// Result type for bind operations
pub type BindResult<T> = Result<T, BindError>;

/// Result type for flag store lookups
pub type FlagResult<T> = Result<T, FlagError>;

/// Result type for handler dispatch
pub type RunResult<T> = Result<T, RunError>;

/// Errors produced while populating a target structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A required positional argument was not supplied
    #[error("not enough args, {field} is required")]
    MissingArgument {
        /// Lower-cased name of the field that wanted the argument
        field: String,
        /// Position that was out of range
        index: usize,
    },

    /// A positional annotation could not be parsed
    #[error("invalid arg tag {tag:?} on {field}")]
    InvalidTag {
        /// Lower-cased field name
        field: String,
        /// The offending annotation text
        tag: String,
    },
}

impl BindError {
    /// Create a missing argument error for a field
    pub fn missing(field: &str, index: usize) -> Self {
        Self::MissingArgument {
            field: field.to_lowercase(),
            index,
        }
    }

    /// Create an invalid tag error for a field
    pub fn invalid_tag<S: Into<String>>(field: &str, tag: S) -> Self {
        Self::InvalidTag {
            field: field.to_lowercase(),
            tag: tag.into(),
        }
    }

    /// Name of the field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::MissingArgument { field, .. } | Self::InvalidTag { field, .. } => field,
        }
    }
}

/// Absence or failure signal from a flag store getter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The flag was never registered with the command
    #[error("flag accessed but not defined: {0}")]
    Unknown(String),

    /// The flag is registered but holds no value
    #[error("flag has no value: {0}")]
    Absent(String),

    /// The flag holds a value of another type
    #[error("flag {name} has a different type: {detail}")]
    TypeMismatch {
        /// Flag name
        name: String,
        /// Description from the flag store
        detail: String,
    },
}

/// Errors returned by the dispatch mechanism
#[derive(Debug, Error)]
pub enum RunError {
    /// A handler returned an error; later handlers were not run
    #[error("handler {index} failed: {source}")]
    Handler {
        /// Zero-based position of the failing handler
        index: usize,
        /// The handler's error
        #[source]
        source: anyhow::Error,
    },

    /// Argument parsing failed in the host framework
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// The command line named no subcommand
    #[error("no subcommand given")]
    MissingSubcommand,

    /// The host matched a subcommand that has no route
    #[error("no route for subcommand: {0}")]
    UnknownSubcommand(String),
}

impl RunError {
    /// Index of the failing handler, if a handler failed
    pub fn handler_index(&self) -> Option<usize> {
        match self {
            Self::Handler { index, .. } => Some(*index),
            _ => None,
        }
    }
}
