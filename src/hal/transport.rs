//! Register Transport
//!
//! The LAN7801 exposes a 12-bit space of 32-bit control and status registers
//! (CSRs). A [`RegisterTransport`] moves one CSR value at a time between the
//! host and the chip; everything else in the driver is built on these two
//! operations.
//!
//! Two adapters are provided:
//!
//! - [`UsbTransport`](super::usb::UsbTransport): vendor control transfers
//! - [`IoctlTransport`](super::ioctl::IoctlTransport): the vendor's
//!   privileged network driver, for hosts where the device is claimed by it
//!
//! Addresses are carried as [`RegisterAddress`], so a transport never sees
//! an address outside the CSR space.

use crate::driver::error::{ConfigError, ConfigResult, IoResult};
use crate::internal::lan7801_regs::reg::SPACE_SIZE;

/// A validated 12-bit CSR address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress(u16);

impl RegisterAddress {
    /// Validate a raw address
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRegisterAddress`] when `addr` is not below 0x1000.
    pub const fn new(addr: u16) -> ConfigResult<Self> {
        if addr < SPACE_SIZE {
            Ok(Self(addr))
        } else {
            Err(ConfigError::InvalidRegisterAddress)
        }
    }

    /// Raw address value
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for RegisterAddress {
    type Error = ConfigError;

    fn try_from(addr: u16) -> ConfigResult<Self> {
        Self::new(addr)
    }
}

impl From<RegisterAddress> for u16 {
    fn from(addr: RegisterAddress) -> Self {
        addr.0
    }
}

/// Moves 32-bit CSR values to and from the LAN7801
///
/// Implementations must perform exactly one device transaction per call
/// (plus whatever retries their channel requires) and report short or
/// malformed transfers as errors rather than returning partial data.
pub trait RegisterTransport {
    /// Read a CSR
    fn read_reg(&mut self, addr: RegisterAddress) -> IoResult<u32>;

    /// Write a CSR
    fn write_reg(&mut self, addr: RegisterAddress, value: u32) -> IoResult<()>;
}

impl<T: RegisterTransport + ?Sized> RegisterTransport for &mut T {
    fn read_reg(&mut self, addr: RegisterAddress) -> IoResult<u32> {
        (**self).read_reg(addr)
    }

    fn write_reg(&mut self, addr: RegisterAddress, value: u32) -> IoResult<()> {
        (**self).write_reg(addr, value)
    }
}
