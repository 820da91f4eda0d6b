/// Convenience result type used across Quadmesh.
pub type QuadmeshResult<T> = Result<T, QuadmeshError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum QuadmeshError {
    /// Invalid user-provided configuration or canvas data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a mesh into a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuadmeshError {
    /// Build a [`QuadmeshError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QuadmeshError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
