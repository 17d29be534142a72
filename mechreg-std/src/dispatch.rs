//! # Registration dispatch
//!
//! The single pass the host runs at startup: decide whether to print the
//! banner, print it, then call every registration entry point in table
//! order.
//!
//! # Failure
//!
//! A registration error is returned exactly as the callback produced it and
//! no later registration runs. Panics unwind through untouched. A banner
//! that cannot be written is reported through `tracing` and otherwise
//! ignored.
//!
//! # Repeated calls
//!
//! Dispatching is not idempotent. Calling it twice registers every
//! mechanism twice and may print the banner twice; whether the host
//! tolerates that is up to the host.

use crate::banner::Banner;
use mechreg_core::{BoxError, HostState, MechanismTable};
use std::io::{self, Write};

/// Register every mechanism in `table`, printing the banner to stderr.
///
/// See [`register_mechanisms_to`] for the exact behavior.
pub fn register_mechanisms<T>(host: &HostState, table: &T) -> Result<(), BoxError>
where
    T: MechanismTable + ?Sized,
{
    // Unlocked handle: registrations may write to stderr from other threads.
    register_mechanisms_to(host, table, &mut io::stderr())
}

/// Register every mechanism in `table`, printing the banner to `diagnostics`.
///
/// The banner is written, in a single write, only when the banner is not
/// suppressed and the rank is below 1, and always before the first
/// registration runs.
///
/// # Example
/// ```
/// use mechreg_core::HostState;
/// use mechreg_std::{RegistryBuilder, register_mechanisms_to};
///
/// fn kv_reg() {}
///
/// let registry = RegistryBuilder::new().register("kv.mod", kv_reg).build();
/// let mut out = Vec::new();
/// register_mechanisms_to(&HostState::new(0, false), &registry, &mut out).unwrap();
/// assert_eq!(out, b"Additional mechanisms from files\n \"kv.mod\"\n");
/// ```
pub fn register_mechanisms_to<T, W>(
    host: &HostState,
    table: &T,
    diagnostics: &mut W,
) -> Result<(), BoxError>
where
    T: MechanismTable + ?Sized,
    W: Write + ?Sized,
{
    let span = tracing::debug_span!(
        "register_mechanisms",
        rank = host.rank(),
        banner_suppressed = host.banner_suppressed(),
        mechanisms = table.len()
    );
    let _enter = span.enter();

    if host.should_print_banner() {
        let banner = Banner::new(table).to_string();
        if let Err(err) = diagnostics
            .write_all(banner.as_bytes())
            .and_then(|()| diagnostics.flush())
        {
            tracing::warn!(error = %err, "failed to write mechanism banner");
        }
    } else {
        tracing::debug!("mechanism banner skipped");
    }

    table.visit(&mut |source, registration| {
        tracing::trace!(source, "registering mechanism");
        registration.register()
    })
}
