/// Convenience result type used across Scriptura.
pub type ScripturaResult<T> = Result<T, ScripturaError>;

/// Top-level error taxonomy used by the canon, plan and progress APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScripturaError {
    /// Invalid caller-provided input (horizon, chapter, book name, unit id).
    #[error("validation error: {0}")]
    Validation(String),

    /// The durable progress store could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScripturaError {
    /// Build a [`ScripturaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScripturaError::Persistence`] value.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Build a [`ScripturaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors caused by bad caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for ScripturaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
