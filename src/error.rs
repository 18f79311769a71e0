use crate::config::StoreError;
use thiserror::Error;

/// A specialized `Result` type for variable resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors surfaced by [`VariableResolver`](crate::VariableResolver).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required variable is neither saved nor set in the environment.
    #[error("ENV variable {name} is missing!")]
    MissingVariable { name: String },

    /// An environment variable is set but cannot be read as the requested type.
    #[error("ENV variable {name} is not a valid {kind}! Value '{value}'")]
    Format {
        name: String,
        kind: &'static str,
        value: String,
    },

    /// The configuration document could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ResolveError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub fn format(name: impl Into<String>, kind: &'static str, value: impl Into<String>) -> Self {
        Self::Format {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingVariable { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
