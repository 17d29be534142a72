//! # Registration entry points
//!
//! Every mechanism exposes exactly one parameterless entry point that
//! installs it into the host's mechanism table. What the entry point does is
//! opaque here; the only contract is the shape of the call and how it
//! reports failure.
//!
//! # Failure
//!
//! A registration may fail by returning an error, which is handed back to
//! the caller unchanged, or by panicking or terminating the process, which
//! nothing in this crate intercepts.

use crate::{error::BoxError, outcome::IntoRegistrationOutcome};

/// A mechanism's registration entry point.
///
/// Functions and closures taking no arguments implement this automatically
/// when they return `()` or `Result<(), E>`:
///
/// ```
/// use mechreg_core::{BoxError, Registration};
///
/// fn kv_reg() {}
/// fn na_reg() -> Result<(), BoxError> {
///     Ok(())
/// }
///
/// assert!(kv_reg.register().is_ok());
/// assert!(na_reg.register().is_ok());
/// ```
///
/// The trait is object safe so heterogeneous registrations can share one
/// table as `dyn Registration`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mechanism registration",
    label = "missing `Registration` implementation",
    note = "Registrations are `Fn()` closures or functions returning `()` or `Result<(), E>`, or types implementing `register`."
)]
pub trait Registration: Send + Sync + 'static {
    /// Install the mechanism into the host's table.
    fn register(&self) -> Result<(), BoxError>;
}

impl<F, R> Registration for F
where
    F: Fn() -> R + Send + Sync + 'static,
    R: IntoRegistrationOutcome,
{
    fn register(&self) -> Result<(), BoxError> {
        (self)().into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct Rejecting;

    impl Registration for Rejecting {
        fn register(&self) -> Result<(), BoxError> {
            Err("mechanism table is closed".into())
        }
    }

    #[test]
    fn closure_registration_runs_on_each_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let registration = move || {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        registration.register().unwrap();
        registration.register().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn trait_objects_dispatch_to_custom_impls() {
        let registrations: Vec<Box<dyn Registration>> = vec![Box::new(|| {}), Box::new(Rejecting)];
        assert!(registrations[0].register().is_ok());
        assert_eq!(
            registrations[1].register().unwrap_err().to_string(),
            "mechanism table is closed"
        );
    }
}
