//! Dynamic registry for mechanisms assembled at startup.
//!
//! This module provides a builder for collecting mechanisms in declaration
//! order and a frozen registry that the dispatcher walks.

use mechreg_core::{BoxError, Mechanism, MechanismTable, Registration, RegistryError};
use std::borrow::Cow;

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// Mechanisms keep the order in which they were registered; that order is
/// the banner order and the registration order.
///
/// # Example
/// ```
/// use mechreg_std::RegistryBuilder;
///
/// fn kv_reg() {}
/// fn na_reg() {}
///
/// let registry = RegistryBuilder::new()
///     .register("mechanisms/kv.mod", kv_reg)
///     .register("mechanisms/na.mod", na_reg)
///     .build();
///
/// assert_eq!(
///     registry.sources().collect::<Vec<_>>(),
///     ["mechanisms/kv.mod", "mechanisms/na.mod"]
/// );
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<Mechanism>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a mechanism.
    ///
    /// Labels are not checked; registering the same source twice yields two
    /// entries. Use [`try_register`](Self::try_register) to reject that.
    pub fn register<R: Registration>(
        mut self,
        source: impl Into<Cow<'static, str>>,
        registration: R,
    ) -> Self {
        self.register_mut(source, registration);
        self
    }

    /// Register a mechanism (mutable version).
    pub fn register_mut<R: Registration>(
        &mut self,
        source: impl Into<Cow<'static, str>>,
        registration: R,
    ) {
        self.entries.push(Mechanism::new(source, registration));
    }

    /// Append an existing mechanism entry.
    pub fn register_mechanism(mut self, mechanism: Mechanism) -> Self {
        self.entries.push(mechanism);
        self
    }

    /// Register a mechanism, rejecting empty or already registered labels.
    pub fn try_register<R: Registration>(
        mut self,
        source: impl Into<Cow<'static, str>>,
        registration: R,
    ) -> Result<Self, RegistryError> {
        let source = source.into();
        if source.is_empty() {
            return Err(RegistryError::EmptySource);
        }
        if self.entries.iter().any(|m| m.source() == source) {
            return Err(RegistryError::DuplicateSource(source.into_owned()));
        }
        self.register_mut(source, registration);
        Ok(self)
    }

    /// Build the immutable registry.
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }

    /// Get the number of registered mechanisms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no mechanisms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Registry - immutable mechanism storage
// ============================================================================

/// An immutable, ordered table of mechanisms.
///
/// Created by calling [`RegistryBuilder::build`]. Cloning is cheap: entries
/// share their registrations.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Mechanism>,
}

impl Registry {
    /// Iterate over all mechanisms in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Mechanism> {
        self.entries.iter()
    }

    /// Iterate over the source labels in table order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Mechanism::source)
    }

    /// Find the first mechanism registered from `source`.
    pub fn get(&self, source: &str) -> Option<&Mechanism> {
        self.entries.iter().find(|m| m.source() == source)
    }

    /// Get the number of mechanisms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all entries.
    pub fn entries(&self) -> &[Mechanism] {
        &self.entries
    }
}

impl FromIterator<Mechanism> for Registry {
    fn from_iter<I: IntoIterator<Item = Mechanism>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Mechanism;
    type IntoIter = std::slice::Iter<'a, Mechanism>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl MechanismTable for Registry {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn visit(
        &self,
        visitor: &mut dyn FnMut(&str, &dyn Registration) -> Result<(), BoxError>,
    ) -> Result<(), BoxError> {
        for mechanism in &self.entries {
            visitor(mechanism.source(), mechanism.registration())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingRegistration;

    fn noop() {}

    #[test]
    fn preserves_declaration_order() {
        let registry = RegistryBuilder::new()
            .register("na.mod", noop)
            .register("kv.mod", noop)
            .register("cad.mod", noop)
            .build();

        let sources: Vec<_> = registry.sources().collect();
        assert_eq!(sources, ["na.mod", "kv.mod", "cad.mod"]);
    }

    #[test]
    fn unchecked_register_keeps_duplicates() {
        let registry = RegistryBuilder::new()
            .register("kv.mod", noop)
            .register("kv.mod", noop)
            .build();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn try_register_rejects_duplicates() {
        let err = RegistryBuilder::new()
            .try_register("kv.mod", noop)
            .and_then(|b| b.try_register("kv.mod", noop))
            .err()
            .expect("duplicate must be rejected");
        assert_eq!(err, RegistryError::DuplicateSource("kv.mod".to_string()));
    }

    #[test]
    fn try_register_rejects_empty_source() {
        let err = RegistryBuilder::new()
            .try_register("", noop)
            .err()
            .expect("empty label must be rejected");
        assert_eq!(err, RegistryError::EmptySource);
    }

    #[test]
    fn visit_stops_at_first_error() {
        let registry = RegistryBuilder::new()
            .register("a.mod", noop)
            .register("b.mod", noop)
            .register("c.mod", noop)
            .build();

        let mut seen = Vec::new();
        let result = registry.visit(&mut |source, _| {
            seen.push(source.to_string());
            if source == "b.mod" {
                Err("stop".into())
            } else {
                Ok(())
            }
        });

        assert!(result.is_err());
        assert_eq!(seen, ["a.mod", "b.mod"]);
    }

    #[test]
    fn collects_from_mechanisms() {
        let registry: Registry = ["x.mod", "y.mod"]
            .into_iter()
            .map(|source| Mechanism::new(source, noop))
            .collect();
        assert_eq!(registry.get("y.mod").map(Mechanism::source), Some("y.mod"));
        assert!(registry.get("z.mod").is_none());
        assert!(!MechanismTable::is_empty(&registry));
    }

    #[test]
    fn register_mechanism_shares_the_entry() {
        let counter = CountingRegistration::new();
        let mechanism = Mechanism::new("kv.mod", counter.clone());
        let registry = RegistryBuilder::new()
            .register_mechanism(mechanism.clone())
            .register("na.mod", noop)
            .build();

        let labels: Vec<_> = registry.iter().map(Mechanism::source).collect();
        assert_eq!(labels, ["kv.mod", "na.mod"]);

        for entry in registry.entries() {
            entry.register().unwrap();
        }
        mechanism.register().unwrap();
        assert_eq!(counter.count(), 2);
    }
}
