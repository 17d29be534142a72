//! C ABI glue for hosts that load mechanisms as native extensions.
//!
//! A C host calls a parameterless `modl_reg` symbol from the extension once
//! at startup, after setting its `nrnmpi_myid` and `nrn_nobanner_` globals.
//! [`export_registrar!`](crate::export_registrar) generates that symbol from
//! a list of `source => registration` pairs.

use mechreg_core::{BoxError, HostState, MechanismTable, Registration};
use std::process;

/// A registration entry point exported by a foreign mechanism object.
#[derive(Debug, Clone, Copy)]
pub struct ForeignRegistration {
    entry: unsafe extern "C" fn(),
}

impl ForeignRegistration {
    /// Wrap a foreign registration symbol.
    ///
    /// # Safety
    ///
    /// `entry` must be safe to call with no arguments from the thread that
    /// runs dispatch, at any point after the host is initialized.
    pub const unsafe fn new(entry: unsafe extern "C" fn()) -> Self {
        Self { entry }
    }
}

impl Registration for ForeignRegistration {
    fn register(&self) -> Result<(), BoxError> {
        // SAFETY: upheld by the caller of `ForeignRegistration::new`.
        unsafe { (self.entry)() };
        Ok(())
    }
}

/// Run a registration pass on behalf of a C entry point.
///
/// A C caller has no way to receive the error, so a failing registration
/// is logged and the process exits with status 1.
pub fn run_registrar<T>(host: &HostState, table: &T)
where
    T: MechanismTable + ?Sized,
{
    if let Err(err) = mechreg_std::register_mechanisms(host, table) {
        tracing::error!(error = %err, "mechanism registration failed");
        eprintln!("mechanism registration failed: {err}");
        process::exit(1);
    }
}

/// Export the host-facing `modl_reg` entry point for a fixed mechanism list.
///
/// The generated function reads the host's `nrnmpi_myid` and
/// `nrn_nobanner_` globals, so the extension must be loaded into a host that
/// defines them.
///
/// # Example
///
/// ```rust,ignore
/// unsafe extern "C" {
///     fn _kv_reg();
///     fn _na_reg();
/// }
///
/// mechreg::export_registrar! {
///     "mechanisms/kv.mod" => unsafe { mechreg::abi::ForeignRegistration::new(_kv_reg) },
///     "mechanisms/na.mod" => unsafe { mechreg::abi::ForeignRegistration::new(_na_reg) },
/// }
/// ```
#[macro_export]
macro_rules! export_registrar {
    ($($source:expr => $registration:expr),* $(,)?) => {
        #[allow(non_upper_case_globals)]
        unsafe extern "C" {
            static nrnmpi_myid: ::core::ffi::c_int;
            static nrn_nobanner_: ::core::ffi::c_int;
        }

        /// Registers every mechanism of this extension with the host.
        #[unsafe(no_mangle)]
        pub extern "C" fn modl_reg() {
            // SAFETY: the host defines and initializes both globals before
            // calling into the extension.
            let host = unsafe { $crate::HostState::from_raw(nrnmpi_myid, nrn_nobanner_) };
            let table = $crate::static_mechanisms![$($source => $registration),*];
            $crate::abi::run_registrar(&host, &table);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechreg_std::RegistryBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FOREIGN_CALLS: AtomicUsize = AtomicUsize::new(0);

    extern "C" fn foreign_entry() {
        FOREIGN_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn foreign_registration_calls_the_symbol() {
        let registration = unsafe { ForeignRegistration::new(foreign_entry) };
        registration.register().unwrap();
        registration.register().unwrap();
        assert_eq!(FOREIGN_CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn run_registrar_completes_a_successful_pass() {
        let calls = std::sync::Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let registry = RegistryBuilder::new()
            .register("kv.mod", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        run_registrar(&HostState::new(1, false), &registry);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
