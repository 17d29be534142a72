#![allow(dead_code)]

use mechreg::{HostState, MechanismTable, register_mechanisms_to};

// ============================================================================
// Host States
// ============================================================================

pub const PRINTER: HostState = HostState::new(0, false);
pub const WORKER: HostState = HostState::new(1, false);
pub const QUIET_PRINTER: HostState = HostState::new(0, true);
pub const QUIET_WORKER: HostState = HostState::new(2, true);

// ============================================================================
// Dispatch Helpers
// ============================================================================

/// Dispatch `table` and return whatever was written to the diagnostic stream.
pub fn dispatch_capturing<T: MechanismTable + ?Sized>(host: &HostState, table: &T) -> String {
    let mut out = Vec::new();
    register_mechanisms_to(host, table, &mut out).expect("registration should succeed");
    String::from_utf8(out).expect("banner is valid UTF-8")
}

/// The quoted labels on the second banner line.
pub fn banner_labels(banner: &str) -> Vec<String> {
    banner
        .lines()
        .nth(1)
        .unwrap_or_default()
        .split('"')
        .skip(1)
        .step_by(2)
        .map(str::to_string)
        .collect()
}
