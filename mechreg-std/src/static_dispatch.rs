//! Static mechanism tables.
//!
//! This module provides an HList-based table whose entries and order are
//! fixed at compile time, the same way a generated registration unit lists
//! its mechanisms.

use mechreg_core::{BoxError, MechanismTable, Registration};

/// HList terminator - represents an empty table.
pub struct HNil;

/// HList cons cell - an entry followed by the rest of the table.
pub struct HCons<H, T> {
    /// The head entry.
    pub head: H,
    /// The tail of the table.
    pub tail: T,
}

/// A source label paired with a statically typed registration.
pub struct StaticEntry<R> {
    /// Source label shown in the banner.
    pub source: &'static str,
    /// Registration entry point.
    pub registration: R,
}

impl<R> StaticEntry<R> {
    /// Create a new static entry.
    pub const fn new(source: &'static str, registration: R) -> Self {
        Self {
            source,
            registration,
        }
    }
}

impl MechanismTable for HNil {
    fn len(&self) -> usize {
        0
    }

    fn visit(
        &self,
        _visitor: &mut dyn FnMut(&str, &dyn Registration) -> Result<(), BoxError>,
    ) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<R, T> MechanismTable for HCons<StaticEntry<R>, T>
where
    R: Registration,
    T: MechanismTable,
{
    fn len(&self) -> usize {
        1 + self.tail.len()
    }

    fn visit(
        &self,
        visitor: &mut dyn FnMut(&str, &dyn Registration) -> Result<(), BoxError>,
    ) -> Result<(), BoxError> {
        visitor(self.head.source, &self.head.registration)?;
        self.tail.visit(visitor)
    }
}

// ============================================================================
// HList Length
// ============================================================================

/// Trait for computing table length at compile time.
pub trait HListLen {
    /// The length of this HList.
    const LEN: usize;
}

impl HListLen for HNil {
    const LEN: usize = 0;
}

impl<H, T: HListLen> HListLen for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

// ============================================================================
// Macro
// ============================================================================

/// Construct a static mechanism table from `source => registration` pairs.
///
/// # Example
/// ```
/// use mechreg_std::{HListLen, static_mechanisms};
///
/// fn kv_reg() {}
/// fn na_reg() {}
///
/// let table = static_mechanisms![
///     "mechanisms/kv.mod" => kv_reg,
///     "mechanisms/na.mod" => na_reg,
/// ];
/// fn len_of<T: HListLen>(_: &T) -> usize {
///     T::LEN
/// }
/// assert_eq!(len_of(&table), 2);
/// ```
#[macro_export]
macro_rules! static_mechanisms {
    () => { $crate::static_dispatch::HNil };
    ($source:expr => $registration:expr $(,)?) => {
        $crate::static_dispatch::HCons {
            head: $crate::static_dispatch::StaticEntry::new($source, $registration),
            tail: $crate::static_dispatch::HNil,
        }
    };
    ($source:expr => $registration:expr, $($rest_source:expr => $rest_registration:expr),+ $(,)?) => {
        $crate::static_dispatch::HCons {
            head: $crate::static_dispatch::StaticEntry::new($source, $registration),
            tail: $crate::static_mechanisms!($($rest_source => $rest_registration),+),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn empty_table_has_no_entries() {
        let table = crate::static_mechanisms![];
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(<HNil as HListLen>::LEN, 0);
    }

    #[test]
    fn visits_in_declared_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let (first, second) = (order.clone(), order.clone());
        let table = crate::static_mechanisms![
            "kv.mod" => move || first.lock().unwrap().push("kv"),
            "na.mod" => move || second.lock().unwrap().push("na"),
        ];

        let mut sources = Vec::new();
        table
            .visit(&mut |source, registration| {
                sources.push(source.to_string());
                registration.register()
            })
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(sources, ["kv.mod", "na.mod"]);
        assert_eq!(*order.lock().unwrap(), ["kv", "na"]);
    }

    #[test]
    fn len_is_known_at_compile_time() {
        type Table = HCons<StaticEntry<fn()>, HCons<StaticEntry<fn()>, HNil>>;
        assert_eq!(<Table as HListLen>::LEN, 2);
    }
}
