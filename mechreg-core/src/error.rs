//! Error types for mechreg.
//!
//! Registration callbacks fail with a [`BoxError`] that is handed back to
//! the host untouched. The only error kinds defined here belong to registry
//! construction:
//!
//! - [`RegistryError`] - A mechanism was rejected by a checked registration

use thiserror::Error;

/// A boxed error type for callback failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building a registry with checked registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The mechanism was given an empty source label.
    #[error("mechanism source label must not be empty")]
    EmptySource,

    /// A mechanism with the same source label is already registered.
    #[error("mechanism already registered from source: {0}")]
    DuplicateSource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_duplicate_source() {
        let err = RegistryError::DuplicateSource("mechanisms/kv.mod".to_string());
        assert_eq!(
            err.to_string(),
            "mechanism already registered from source: mechanisms/kv.mod"
        );
    }

    #[test]
    fn registry_error_boxes_into_box_error() {
        let boxed: BoxError = RegistryError::EmptySource.into();
        assert!(boxed.downcast_ref::<RegistryError>().is_some());
    }
}
