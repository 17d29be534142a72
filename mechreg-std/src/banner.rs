//! Startup banner naming the mechanisms being loaded.

use mechreg_core::{BoxError, MechanismTable};
use std::fmt;

/// First line of the banner.
pub const BANNER_HEADER: &str = "Additional mechanisms from files";

/// Renders the informational banner for a mechanism table.
///
/// The output is the header line, then every source label quoted and
/// prefixed with a space, all on one line in table order, then a newline:
///
/// ```text
/// Additional mechanisms from files
///  "mechanisms/kv.mod" "mechanisms/na.mod"
/// ```
pub struct Banner<'a, T: ?Sized> {
    table: &'a T,
}

impl<'a, T: MechanismTable + ?Sized> Banner<'a, T> {
    /// Create a banner for `table`.
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }
}

impl<T: MechanismTable + ?Sized> fmt::Display for Banner<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER_HEADER}")?;
        self.table
            .visit(&mut |source, _| write!(f, " \"{source}\"").map_err(BoxError::from))
            .map_err(|_| fmt::Error)?;
        writeln!(f)
    }
}
