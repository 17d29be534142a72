//! Testing utilities for mechreg.
//!
//! Stand-ins for mechanism registration entry points, for checking what the
//! dispatcher called and in which order.
//!
//! # Features
//!
//! - [`RecordingRegistration`]: Records the order in which named registrations run
//! - [`CountingRegistration`]: Counts how often it was invoked
//! - [`FailingRegistration`]: Always fails with a fixed message

use mechreg_core::{BoxError, Registration};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Registration
// ============================================================================

/// A shared call log for several registrations.
///
/// Each handle produced by [`named`](Self::named) appends its name to the
/// log when invoked.
///
/// # Example
///
/// ```
/// use mechreg_core::Registration;
/// use mechreg_std::testing::RecordingRegistration;
///
/// let recorder = RecordingRegistration::new();
/// let kv = recorder.named("kv");
/// let na = recorder.named("na");
///
/// kv.register().unwrap();
/// na.register().unwrap();
/// assert_eq!(recorder.calls(), ["kv", "na"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingRegistration {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingRegistration {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registration that records `name` each time it runs.
    pub fn named(&self, name: &'static str) -> RecordedCall {
        RecordedCall {
            name,
            calls: self.calls.clone(),
        }
    }

    /// Names recorded so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// A registration handle created by [`RecordingRegistration::named`].
pub struct RecordedCall {
    name: &'static str,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl Registration for RecordedCall {
    fn register(&self) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(self.name);
        Ok(())
    }
}

// ============================================================================
// Counting Registration
// ============================================================================

/// A registration that counts invocations.
///
/// Clones share the counter.
#[derive(Clone, Default)]
pub struct CountingRegistration {
    count: Arc<AtomicUsize>,
}

impl CountingRegistration {
    /// Create a new counting registration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Registration for CountingRegistration {
    fn register(&self) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Registration
// ============================================================================

/// A registration that always fails.
#[derive(Debug, Clone)]
pub struct FailingRegistration {
    message: &'static str,
}

impl FailingRegistration {
    /// Create a registration failing with `message`.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Registration for FailingRegistration {
    fn register(&self) -> Result<(), BoxError> {
        Err(self.message.into())
    }
}
