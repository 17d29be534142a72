//! Outcome conversion for registration callbacks.

use crate::error::BoxError;

/// Trait for converting a registration callback's return value into an
/// outcome the dispatcher can propagate.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), E>` → success, or the error boxed as-is
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid registration outcome",
    label = "missing `IntoRegistrationOutcome` implementation",
    note = "Registration functions must return `()` or `Result<(), E>` where `E: Into<BoxError>`."
)]
pub trait IntoRegistrationOutcome {
    /// Convert the return value into success or a boxed failure.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoRegistrationOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoRegistrationOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
