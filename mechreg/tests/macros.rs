//! Integration tests for the `#[mechanism]` attribute.
//!
//! All mechanisms below land in the same link-time collection, so only one
//! test dispatches them.

#![cfg(feature = "macros")]

use lazy_static::lazy_static;
use mechreg::{BoxError, collected::collect_mechanisms};
use std::sync::Mutex;

mod common;
use common::{PRINTER, banner_labels, dispatch_capturing};

lazy_static! {
    static ref CALLS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());
}

#[mechreg::mechanism(source = "mechanisms/na.mod", order = 1)]
fn na_reg() {
    CALLS.lock().unwrap().push("na");
}

#[mechreg::mechanism(source = "mechanisms/kv.mod")]
fn kv_reg() -> Result<(), BoxError> {
    CALLS.lock().unwrap().push("kv");
    Ok(())
}

#[mechreg::mechanism(order = -1)]
fn pas_reg() {
    CALLS.lock().unwrap().push("pas");
}

#[test]
fn test_collected_sources_follow_order_key() {
    let registry = collect_mechanisms();
    let sources: Vec<_> = registry.sources().collect();
    assert_eq!(sources, ["pas_reg", "mechanisms/kv.mod", "mechanisms/na.mod"]);
}

#[test]
fn test_collected_dispatch() {
    let registry = collect_mechanisms();
    let output = dispatch_capturing(&PRINTER, &registry);

    assert_eq!(
        banner_labels(&output),
        ["pas_reg", "mechanisms/kv.mod", "mechanisms/na.mod"]
    );
    assert_eq!(*CALLS.lock().unwrap(), ["pas", "kv", "na"]);
}
