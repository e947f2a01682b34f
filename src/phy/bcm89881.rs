//! BCM89881 PHY Driver
//!
//! Driver for the Broadcom BCM89881 100/1000BASE-T1 automotive Ethernet
//! PHY. All registers are Clause-45; on the HydraLink the PHY sits behind
//! the LAN7801 MII controller, which emulates Clause-45 through registers
//! 13/14, but any [`MmdBus`] works.
//!
//! The driver only holds the PHY address. The bus is passed to every call,
//! so the same bus can keep serving other register spaces in between.
//!
//! # Speed and role
//!
//! BASE-T1 has no auto-negotiation here: speed is forced through the
//! PMA/PMD control 1 speed-selection bits and the role through the BASE-T1
//! PMA/PMD control register. A control 1 pattern that is neither the
//! 100 Mb/s nor the 1000 Mb/s selection reads back as `None`.
//!
//! ```ignore
//! let phy = Bcm89881::new(HYDRALINK_PHY_ADDR)?;
//! phy.verify_id(&mut mac)?;
//! phy.set_speed(&mut mac, Speed::Mbps1000)?;
//! phy.set_master(&mut mac, true)?;
//! ```

use crate::driver::config::Speed;
use crate::driver::error::{ConfigError, DeviceError, Result};
use crate::hal::mdio::{MmdBus, check_phy_addr};
use crate::internal::bcm89881_regs::{devad, pma_ctrl1, phy_id, reg, t1_ctrl};

// =============================================================================
// Diagnostics
// =============================================================================

/// A named register in the diagnostic dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticRegister {
    /// Register name
    pub name: &'static str,
    /// MMD device address
    pub devad: u8,
    /// Register index within the device
    pub reg: u16,
}

const fn diag(name: &'static str, devad: u8, reg: u16) -> DiagnosticRegister {
    DiagnosticRegister { name, devad, reg }
}

/// Registers read by [`Bcm89881::read_diagnostics`], in dump order
pub const DIAGNOSTIC_REGISTERS: &[DiagnosticRegister] = &[
    diag("STRAP_SGMII_REGISTER_1", devad::VENDOR_1, reg::STRAP_SGMII1),
    diag("PMA_PMD_CONTROL_1", devad::PMA_PMD, reg::PMA_CTRL1),
    diag("PMA_PMD_STATUS_1", devad::PMA_PMD, reg::PMA_STAT1),
    diag("PMA_PMD_DEVICE_ID_1", devad::PMA_PMD, reg::DEV_ID1),
    diag("PMA_PMD_DEVICE_ID_2", devad::PMA_PMD, reg::DEV_ID2),
    diag("PMA_PMD_SPEED_ABILITY", devad::PMA_PMD, reg::SPEED_ABILITY),
    diag("PMA_PMD_DEVICES_IN_PACKAGE_1", devad::PMA_PMD, reg::DEV_IN_PKG1),
    diag("PMA_PMD_DEVICES_IN_PACKAGE_2", devad::PMA_PMD, reg::DEV_IN_PKG2),
    diag("PMA_PMD_CONTROL_2", devad::PMA_PMD, reg::PMA_CTRL2),
    diag("PMA_PMD_STATUS_2", devad::PMA_PMD, reg::PMA_STAT2),
    diag("PMA_PMD_TRANSMIT_DISABLE", devad::PMA_PMD, reg::TX_DISABLE),
    diag("PMD_RECEIVE_SIGNAL_DETECT", devad::PMA_PMD, reg::RX_SIGNAL_DETECT),
    diag("PMA_PMD_EXTENDED_ABILITY", devad::PMA_PMD, reg::EXT_ABILITY),
    diag("PMA_PMD_PACKAGE_ID_1", devad::PMA_PMD, reg::PKG_ID1),
    diag("PMA_PMD_PACKAGE_ID_2", devad::PMA_PMD, reg::PKG_ID2),
    diag("BASET1_PMA_PMD_EXTENDED_ABILITY", devad::PMA_PMD, reg::T1_EXT_ABILITY),
    diag("BASET1_PMA_PMD_CONTROL", devad::PMA_PMD, reg::T1_CTRL),
    diag("BASE100T1_PMA_PMD", devad::PMA_PMD, reg::T1_100_PMA),
    diag("BASE1000T1_PMA_CONTROL", devad::PMA_PMD, reg::T1_1000_PMA_CTRL),
    diag("BASE1000T1_PMA_STATUS", devad::PMA_PMD, reg::T1_1000_PMA_STAT),
    diag("BASE1000T1_TRAINING", devad::PMA_PMD, reg::T1_1000_TRAINING),
    diag("BASE1000T1_LINK_PARTNER_TRAINING", devad::PMA_PMD, reg::T1_1000_LP_TRAINING),
    diag("BASE1000T1_TEST_MODE_CONTROL", devad::PMA_PMD, reg::T1_1000_TEST_MODE),
    diag("CURRENT_MSE", devad::PMA_PMD, reg::CURRENT_MSE),
    diag("RGMII_CONTROL", devad::PMA_PMD, reg::RGMII_CTRL),
    diag("RGMII_CONTROL_2", devad::PMA_PMD, reg::RGMII_CTRL2),
    diag("SWREG_CONTROL_RGMII_SGMII_SEL", devad::PMA_PMD, reg::RGMII_SGMII_SEL),
    diag("LED_INTR_CONTROL", devad::PMA_PMD, reg::LED_INTR_CTRL),
];

// =============================================================================
// Driver
// =============================================================================

/// BCM89881 register file at one PHY address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bcm89881 {
    addr: u8,
}

impl Bcm89881 {
    /// Create a driver for the PHY at `addr`
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPhyAddress`] if `addr` does not fit 5 bits.
    pub const fn new(addr: u8) -> Result<Self> {
        match check_phy_addr(addr) {
            Ok(()) => Ok(Self { addr }),
            Err(e) => Err(e),
        }
    }

    /// PHY address
    pub const fn address(&self) -> u8 {
        self.addr
    }

    /// Read a register
    pub fn get<M: MmdBus>(&self, mdio: &mut M, devad: u8, reg: u16) -> Result<u16> {
        mdio.read_c45(self.addr, devad, reg)
    }

    /// Write a register
    pub fn set<M: MmdBus>(&self, mdio: &mut M, devad: u8, reg: u16, value: u16) -> Result<()> {
        mdio.write_c45(self.addr, devad, reg, value)
    }

    /// Set and clear bits of a register; returns the resulting value.
    ///
    /// No write is issued when the value is already as requested.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConflictingMasks`] if `set` and `clear` overlap,
    /// raised before any bus access.
    pub fn edit_register<M: MmdBus>(
        &self,
        mdio: &mut M,
        devad: u8,
        reg: u16,
        set: u16,
        clear: u16,
    ) -> Result<u16> {
        if set & clear != 0 {
            return Err(ConfigError::ConflictingMasks.into());
        }
        let old = self.get(mdio, devad, reg)?;
        let new = (old & !clear) | set;
        if new != old {
            self.set(mdio, devad, reg, new)?;
        }
        Ok(new)
    }

    /// Device identifier 1 (DEVAD 1, register 2)
    pub fn phy_id<M: MmdBus>(&self, mdio: &mut M) -> Result<u16> {
        self.get(mdio, devad::PMA_PMD, reg::DEV_ID1)
    }

    /// Check the device identifier
    ///
    /// # Errors
    ///
    /// [`DeviceError::WrongPhy`] with the value read.
    pub fn verify_id<M: MmdBus>(&self, mdio: &mut M) -> Result<u16> {
        let id = self.phy_id(mdio)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("bcm89881: ID1 = {:#06x}", id);
        if id != phy_id::ID1 {
            return Err(DeviceError::WrongPhy(id).into());
        }
        Ok(id)
    }

    /// Hold or release the PMA/PMD in software reset
    pub fn reset<M: MmdBus>(&self, mdio: &mut M, enable: bool) -> Result<()> {
        let (set, clear) = if enable {
            (pma_ctrl1::RESET, 0)
        } else {
            (0, pma_ctrl1::RESET)
        };
        self.edit_register(mdio, devad::PMA_PMD, reg::PMA_CTRL1, set, clear)?;
        Ok(())
    }

    /// Force the link speed
    pub fn set_speed<M: MmdBus>(&self, mdio: &mut M, speed: Speed) -> Result<()> {
        let set = match speed {
            Speed::Mbps100 => pma_ctrl1::SPEED_100,
            Speed::Mbps1000 => pma_ctrl1::SPEED_1000,
        };
        self.edit_register(
            mdio,
            devad::PMA_PMD,
            reg::PMA_CTRL1,
            set,
            pma_ctrl1::SPEED_SEL_MASK & !set,
        )?;
        Ok(())
    }

    /// Force the link speed given in Mb/s
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedSpeed`] for anything but 100 or 1000,
    /// raised before any bus access.
    pub fn set_speed_mbps<M: MmdBus>(&self, mdio: &mut M, mbps: u32) -> Result<()> {
        self.set_speed(mdio, Speed::from_mbps(mbps)?)
    }

    /// Forced link speed, or `None` for an unrecognised selection
    pub fn get_speed<M: MmdBus>(&self, mdio: &mut M) -> Result<Option<Speed>> {
        let ctrl = self.get(mdio, devad::PMA_PMD, reg::PMA_CTRL1)?;
        Ok(match ctrl & pma_ctrl1::SPEED_SEL_MASK {
            pma_ctrl1::SPEED_100 => Some(Speed::Mbps100),
            pma_ctrl1::SPEED_1000 => Some(Speed::Mbps1000),
            _ => None,
        })
    }

    /// Select master (`true`) or slave role
    pub fn set_master<M: MmdBus>(&self, mdio: &mut M, master: bool) -> Result<()> {
        let (set, clear) = if master {
            (t1_ctrl::MASTER, 0)
        } else {
            (0, t1_ctrl::MASTER)
        };
        self.edit_register(mdio, devad::PMA_PMD, reg::T1_CTRL, set, clear)?;
        Ok(())
    }

    /// Whether the PHY is configured as master
    pub fn get_master<M: MmdBus>(&self, mdio: &mut M) -> Result<bool> {
        Ok(self.get(mdio, devad::PMA_PMD, reg::T1_CTRL)? & t1_ctrl::MASTER != 0)
    }

    /// Read every register of [`DIAGNOSTIC_REGISTERS`] and hand it to
    /// `visit` together with its live value.
    pub fn read_diagnostics<M, F>(&self, mdio: &mut M, mut visit: F) -> Result<()>
    where
        M: MmdBus,
        F: FnMut(&DiagnosticRegister, u16),
    {
        for entry in DIAGNOSTIC_REGISTERS {
            let value = self.get(mdio, entry.devad, entry.reg)?;
            visit(entry, value);
        }
        Ok(())
    }
}
