//! Host-owned process state consulted at registration time.

use std::ffi::c_int;

/// Rank and banner settings established by the host before registration.
///
/// The host owns these values for the whole process lifetime; the
/// dispatcher only reads them. Only ranks below 1 (rank 0, or a process
/// running outside a distributed group) print the banner.
///
/// # Example
/// ```
/// use mechreg_core::HostState;
///
/// let host = HostState::default().with_rank(3);
/// assert!(!host.should_print_banner());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostState {
    rank: i32,
    banner_suppressed: bool,
}

impl HostState {
    /// Create host state from a rank and a banner-suppression flag.
    pub const fn new(rank: i32, banner_suppressed: bool) -> Self {
        Self {
            rank,
            banner_suppressed,
        }
    }

    /// Build host state from the raw integers a C host keeps.
    ///
    /// Any non-zero `nobanner` value suppresses the banner.
    pub const fn from_raw(myid: c_int, nobanner: c_int) -> Self {
        Self::new(myid, nobanner != 0)
    }

    /// Set the rank identifier.
    pub const fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    /// Set the banner-suppression flag.
    pub const fn with_banner_suppressed(mut self, suppressed: bool) -> Self {
        self.banner_suppressed = suppressed;
        self
    }

    /// The rank identifier of this process.
    pub const fn rank(&self) -> i32 {
        self.rank
    }

    /// Whether banner output is suppressed.
    pub const fn banner_suppressed(&self) -> bool {
        self.banner_suppressed
    }

    /// Whether this process is the designated banner printer.
    pub const fn is_banner_rank(&self) -> bool {
        self.rank < 1
    }

    /// Whether the startup banner should be printed.
    pub const fn should_print_banner(&self) -> bool {
        !self.banner_suppressed && self.is_banner_rank()
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self::new(0, false)
    }
}
