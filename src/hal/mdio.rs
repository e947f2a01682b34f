//! MDIO (Management Data Input/Output) HAL
//!
//! Bus traits used by PHY drivers:
//!
//! - [`MdioBus`]: Clause-22 register access (5-bit PHY address, 5-bit register)
//! - [`MmdBus`]: Clause-45 register access (5-bit DEVAD, 16-bit register)
//!
//! [`MmdBus`] has a default implementation that emulates Clause-45 access
//! through the Clause-22 MMD access registers (13 and 14), which is what the
//! LAN7801 MII controller needs. A bus with native Clause-45 frames can
//! override both methods.

use crate::driver::error::{ConfigError, Error, Result};
use crate::internal::constants::{MAX_DEVAD, MAX_PHY_ADDR, MAX_REG_ADDR};

// =============================================================================
// Register Definitions
// =============================================================================

/// Clause-22 registers used for MMD access
pub mod phy_reg {
    /// MMD access control
    pub const MMD_CTRL: u8 = 13;
    /// MMD access address/data
    pub const MMD_DATA: u8 = 14;
}

/// MMD access control function field (bits 15:14)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum MmdFunction {
    /// Following data access sets the register address
    Address = 0b00 << 14,
    /// Following data access reads/writes the register, no post-increment
    Data = 0b01 << 14,
}

impl MmdFunction {
    /// MMD access control value for `devad`
    pub const fn control(self, devad: u8) -> u16 {
        self as u16 | (devad as u16 & MAX_DEVAD as u16)
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Check a 5-bit PHY address
pub const fn check_phy_addr(phy_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(Error::Config(ConfigError::InvalidPhyAddress));
    }
    Ok(())
}

/// Check a PHY address and a 5-bit Clause-22 register index
pub const fn check_c22(phy_addr: u8, reg_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(Error::Config(ConfigError::InvalidPhyAddress));
    }
    if reg_addr > MAX_REG_ADDR {
        return Err(Error::Config(ConfigError::InvalidRegisterIndex));
    }
    Ok(())
}

/// Check a PHY address and a 5-bit MMD device address
pub const fn check_c45(phy_addr: u8, devad: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(Error::Config(ConfigError::InvalidPhyAddress));
    }
    if devad > MAX_DEVAD {
        return Err(Error::Config(ConfigError::InvalidDeviceAddress));
    }
    Ok(())
}

// =============================================================================
// MDIO Bus Traits
// =============================================================================

/// Trait for Clause-22 MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

/// Trait for Clause-45 (MMD) register access
pub trait MmdBus: MdioBus {
    /// Read an MMD register.
    ///
    /// The default emulates the access with four Clause-22 operations:
    /// select address function, write the register number, select data
    /// function, read the data register.
    fn read_c45(&mut self, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        check_c45(phy_addr, devad)?;
        self.write(
            phy_addr,
            phy_reg::MMD_CTRL,
            MmdFunction::Address.control(devad),
        )?;
        self.write(phy_addr, phy_reg::MMD_DATA, reg)?;
        self.write(phy_addr, phy_reg::MMD_CTRL, MmdFunction::Data.control(devad))?;
        self.read(phy_addr, phy_reg::MMD_DATA)
    }

    /// Write an MMD register.
    ///
    /// Same sequence as [`read_c45`](Self::read_c45), ending with a write of
    /// the data register.
    fn write_c45(&mut self, phy_addr: u8, devad: u8, reg: u16, value: u16) -> Result<()> {
        check_c45(phy_addr, devad)?;
        self.write(
            phy_addr,
            phy_reg::MMD_CTRL,
            MmdFunction::Address.control(devad),
        )?;
        self.write(phy_addr, phy_reg::MMD_DATA, reg)?;
        self.write(phy_addr, phy_reg::MMD_CTRL, MmdFunction::Data.control(devad))?;
        self.write(phy_addr, phy_reg::MMD_DATA, value)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

impl<M: MmdBus + ?Sized> MmdBus for &mut M {
    fn read_c45(&mut self, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        (**self).read_c45(phy_addr, devad, reg)
    }

    fn write_c45(&mut self, phy_addr: u8, devad: u8, reg: u16, value: u16) -> Result<()> {
        (**self).write_c45(phy_addr, devad, reg, value)
    }
}
