//! # mechreg - Startup Registration of Simulation Mechanisms
//!
//! `mechreg` is the registration hook a simulation host runs once at startup
//! to activate externally compiled mechanisms. It optionally prints a banner
//! naming the mechanisms being loaded, then calls every mechanism's
//! registration entry point in a fixed order.
//!
//! ## Quick Start
//!
//! ```rust
//! use mechreg::{HostState, RegistryBuilder, register_mechanisms_to};
//!
//! fn kv_reg() {}
//! fn na_reg() {}
//!
//! let registry = RegistryBuilder::new()
//!     .register("mechanisms/kv.mod", kv_reg)
//!     .register("mechanisms/na.mod", na_reg)
//!     .build();
//!
//! let mut banner = Vec::new();
//! register_mechanisms_to(&HostState::new(0, false), &registry, &mut banner)?;
//! # Ok::<(), mechreg::BoxError>(())
//! ```
//!
//! ## Tables
//!
//! - [`Registry`]: built at startup with [`RegistryBuilder`]
//! - [`static_mechanisms!`]: fixed at compile time
//! - `collect_mechanisms()`: gathered at link time (feature `inventory`,
//!   with the `#[mechanism]` attribute under feature `macros`)
//!
//! ## C hosts
//!
//! [`export_registrar!`] emits the `modl_reg` symbol a C host calls.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod abi;

pub use mechreg_core::{
    BoxError, HostState, IntoRegistrationOutcome, Mechanism, MechanismTable, Registration,
    RegistryError,
};

pub use mechreg_std::{
    BANNER_HEADER, Banner, HCons, HListLen, HNil, Registry, RegistryBuilder, StaticEntry,
    register_mechanisms, register_mechanisms_to, static_mechanisms,
};

/// Static table support module.
pub mod static_dispatch {
    pub use mechreg_std::static_dispatch::{HCons, HListLen, HNil, StaticEntry};
}

/// Mechanisms collected at link time.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use mechreg_std::collected::{CollectedMechanism, collect_mechanisms};
}

/// Testing utilities.
pub mod testing {
    pub use mechreg_std::testing::{
        CountingRegistration, FailingRegistration, RecordedCall, RecordingRegistration,
    };
}

/// Prelude module - common imports for mechreg.
///
/// # Usage
///
/// ```rust
/// use mechreg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, HostState, Mechanism, MechanismTable, Registration, Registry, RegistryBuilder,
        register_mechanisms, register_mechanisms_to, static_mechanisms,
    };
}

#[cfg(feature = "macros")]
pub use mechreg_macros::mechanism;

#[cfg(feature = "inventory")]
pub use inventory;
