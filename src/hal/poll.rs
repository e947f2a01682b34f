//! Bounded Waits
//!
//! Every hardware busy flag and every "wait until the datapath stops" loop in
//! the driver goes through [`poll_until`]. Time is accounted in requested
//! delay, so the budget is an upper bound on the number of polls rather than
//! wall-clock time; over USB each poll also costs a round trip.

use embedded_hal::delay::DelayNs;

use crate::internal::constants::POLL_INTERVAL_US;

/// Budget for one bounded wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollPolicy {
    /// Total time to wait before giving up, in microseconds
    pub timeout_us: u32,
    /// Delay between two polls, in microseconds
    pub interval_us: u32,
}

impl PollPolicy {
    /// Create a policy with the given budget and interval
    #[must_use]
    pub const fn new(timeout_us: u32, interval_us: u32) -> Self {
        Self {
            timeout_us,
            interval_us,
        }
    }

    /// Create a policy polling at the default interval
    #[must_use]
    pub const fn with_timeout_us(timeout_us: u32) -> Self {
        Self::new(timeout_us, POLL_INTERVAL_US)
    }

    /// Upper bound on the number of polls this policy allows
    pub const fn max_polls(&self) -> u32 {
        if self.interval_us == 0 {
            1
        } else {
            self.timeout_us / self.interval_us + 1
        }
    }
}

/// Poll `ready` until it returns `true` or the budget runs out.
///
/// `ready` is evaluated once before any delay, so a flag that is already
/// clear costs a single poll. Errors from `ready` abort the wait
/// immediately. On expiry `on_timeout` is returned.
pub fn poll_until<D, E, F>(
    delay: &mut D,
    policy: PollPolicy,
    on_timeout: E,
    mut ready: F,
) -> Result<(), E>
where
    D: DelayNs,
    F: FnMut() -> Result<bool, E>,
{
    let mut elapsed = 0u32;
    loop {
        if ready()? {
            return Ok(());
        }
        if elapsed >= policy.timeout_us || policy.interval_us == 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("poll: gave up after {} us", elapsed);
            return Err(on_timeout);
        }
        delay.delay_us(policy.interval_us);
        elapsed = elapsed.saturating_add(policy.interval_us);
    }
}
