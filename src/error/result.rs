//! Result type alias and context helpers.

use super::context::ErrorContext;
use super::scale_error::ScaleError;

/// Type alias for Results using ScaleError.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use scaled_props::error::{ErrorContext, ResultExt};
    ///
    /// let config = load_config(path)
    ///     .context(ErrorContext::new("load_config").with_component("cli"))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> ScaleResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> ScaleResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ScaleError>,
{
    fn context(self, ctx: ErrorContext) -> ScaleResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> ScaleResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
