//! Handler output conversion.

use crate::error::BoxError;

/// Trait for converting a handler's return value into a dispatch outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), E>` → success, or the error boxed
///
/// Errors are never swallowed: a failing handler aborts the rest of its
/// dispatch cycle and the error reaches whoever started the cycle.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a Grapnel handler",
    label = "handlers must return `()` or `Result<(), E>`",
    note = "Implement `IntoHandlerResult` for `{Self}` to use it as a handler output."
)]
pub trait IntoHandlerResult {
    /// Convert the output into a dispatch outcome.
    fn into_handler_result(self) -> Result<(), BoxError>;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_handler_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
