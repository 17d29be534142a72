//! Mechanisms collected at link time via `inventory`.
//!
//! Mechanism crates submit a [`CollectedMechanism`] next to their
//! registration function (usually through the `#[mechanism]` attribute) and
//! the host gathers every submission with [`collect_mechanisms`].
//!
//! Link-time collection has no inherent order, so every submission carries
//! an explicit `order` key. Entries are sorted by `(order, source)`, which
//! keeps the banner and the registration sequence identical between runs.

use crate::registry::Registry;
use mechreg_core::{BoxError, Mechanism, Registration};

/// A mechanism submitted to the global collection.
pub struct CollectedMechanism {
    /// Source label shown in the banner.
    pub source: &'static str,
    /// Sort key (lower runs first).
    pub order: i32,
    /// Registration entry point.
    pub registration: &'static dyn Registration,
}

impl CollectedMechanism {
    /// Create a new collected mechanism entry.
    pub const fn new(
        source: &'static str,
        order: i32,
        registration: &'static dyn Registration,
    ) -> Self {
        Self {
            source,
            order,
            registration,
        }
    }
}

inventory::collect!(CollectedMechanism);

struct StaticRegistration(&'static dyn Registration);

impl Registration for StaticRegistration {
    fn register(&self) -> Result<(), BoxError> {
        self.0.register()
    }
}

/// Collects all submitted mechanisms into a registry.
///
/// Returns the entries sorted by `order`, then by source label.
pub fn collect_mechanisms() -> Registry {
    let mut entries: Vec<&CollectedMechanism> =
        inventory::iter::<CollectedMechanism>.into_iter().collect();

    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.source.cmp(b.source)));

    entries
        .into_iter()
        .map(|entry| Mechanism::new(entry.source, StaticRegistration(entry.registration)))
        .collect()
}
