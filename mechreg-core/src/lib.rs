//! # mechreg-core
//!
//! Core contracts for registering externally compiled simulation mechanisms
//! with a host process.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! mechanism crates that only need to expose a registration entry point,
//! without pulling in the dispatcher from `mechreg-std`.
//!
//! # Building Blocks
//!
//! ## Registration ([`Registration`])
//!
//! The entry point a mechanism exposes: takes nothing, returns nothing, and
//! installs the mechanism into the host's table as a side effect. Plain
//! functions and closures implement it directly; fallible ones report
//! failure through [`IntoRegistrationOutcome`].
//!
//! ## Mechanism ([`Mechanism`])
//!
//! A registration paired with the human-readable source label the host shows
//! in its startup banner.
//!
//! ## Tables ([`MechanismTable`])
//!
//! An ordered collection of mechanisms that can be walked front to back.
//! Dynamic registries and compile-time chains in `mechreg-std` both
//! implement it, so the dispatcher does not care which one it is given.
//!
//! ## Host state ([`HostState`])
//!
//! The rank identifier and banner-suppression flag owned by the host,
//! passed explicitly instead of being read from process globals.
//!
//! # Error Types
//!
//! - [`BoxError`] - Failure reported by a registration callback
//! - [`RegistryError`] - Rejected registry construction

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod host;
mod mechanism;
mod outcome;
mod registration;
mod table;

// Re-exports
pub use error::{BoxError, RegistryError};
pub use host::HostState;
pub use mechanism::Mechanism;
pub use outcome::IntoRegistrationOutcome;
pub use registration::Registration;
pub use table::MechanismTable;
