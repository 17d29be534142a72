use crate::{error::BoxError, registration::Registration};

/// An ordered collection of mechanisms.
///
/// This trait abstracts the source of mechanisms (e.g. a dynamic registry or
/// a compile-time chain). Implementations must visit entries in the same
/// fixed order every time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mechanism table",
    label = "missing `MechanismTable` implementation",
    note = "Implement `MechanismTable` to allow dispatching this collection of mechanisms."
)]
pub trait MechanismTable {
    /// Number of entries in the table.
    fn len(&self) -> usize;

    /// Whether the table has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk the entries in table order.
    ///
    /// Stops at the first error returned by `visitor` and returns it.
    fn visit(
        &self,
        visitor: &mut dyn FnMut(&str, &dyn Registration) -> Result<(), BoxError>,
    ) -> Result<(), BoxError>;
}

impl<T: MechanismTable + ?Sized> MechanismTable for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn visit(
        &self,
        visitor: &mut dyn FnMut(&str, &dyn Registration) -> Result<(), BoxError>,
    ) -> Result<(), BoxError> {
        (**self).visit(visitor)
    }
}
