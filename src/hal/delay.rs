//! Host delay
//!
//! A [`DelayNs`] backed by `std::thread::sleep`, for running the driver from
//! a desktop process. Embedded targets pass their HAL's delay instead.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// Blocking delay using the OS scheduler
///
/// Sleeps are at least as long as requested; the OS may oversleep, which
/// only makes bounded waits more lenient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdDelay;

impl StdDelay {
    /// Create a new delay
    pub const fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
