//! # mechreg-std
//!
//! Standard implementations for mechreg.
//!
//! This crate provides:
//! - **Dynamic tables**: [`Registry`], [`RegistryBuilder`]
//! - **Static tables**: [`HCons`], [`HNil`], [`StaticEntry`], [`static_mechanisms!`] macro
//! - **Banner**: [`Banner`] rendering of the startup banner
//! - **Dispatch**: [`register_mechanisms`], [`register_mechanisms_to`]
//! - **Collected tables**: `collected` module (feature `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use mechreg_core;

// Modules
pub mod banner;
#[cfg(feature = "inventory")]
pub mod collected;
pub mod dispatch;
pub mod registry;
pub mod static_dispatch;
pub mod testing;

pub use banner::{BANNER_HEADER, Banner};
pub use dispatch::{register_mechanisms, register_mechanisms_to};
pub use registry::{Registry, RegistryBuilder};
pub use static_dispatch::{HCons, HListLen, HNil, StaticEntry};

#[cfg(feature = "inventory")]
pub use inventory;
