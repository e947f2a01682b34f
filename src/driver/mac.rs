//! LAN7801 MAC Register File
//!
//! [`Lan7801`] owns a [`RegisterTransport`] and builds the MAC-side
//! operations on top of single CSR reads and writes: the MII management
//! controller (Clause-22 frames and Clause-45 emulation), the EEPROM
//! controller (see [`eeprom`](super::eeprom)), the speed/ASD fields of
//! `MAC_CR`, the receive filter, the station address and the TX/RX
//! datapath enables.
//!
//! Every busy flag is polled with a bounded wait from [`BusTimeouts`].
//!
//! Read-modify-write helpers skip the write when the value would not
//! change; whole-register programming always writes.

use embedded_hal::delay::DelayNs;

use super::config::{BusTimeouts, MacAddress};
use super::error::{ConfigError, DeviceError, Error, IoError, Result};
use crate::hal::mdio::{MdioBus, MmdBus, check_c22};
use crate::hal::poll::{PollPolicy, poll_until};
use crate::hal::transport::{RegisterAddress, RegisterTransport};
use crate::internal::constants::MAC_CHIP_ID;
use crate::internal::lan7801_regs::{
    e2p_cmd, gpio_cfg0, hw_cfg, id_rev, mac_cr, mac_path, mii_acc, mii_data, reg, rfe_ctl,
};

/// LAN7801 CSR access and MAC-side protocols
pub struct Lan7801<T: RegisterTransport, D: DelayNs> {
    transport: T,
    delay: D,
    timeouts: BusTimeouts,
}

fn read_csr<T: RegisterTransport>(transport: &mut T, addr: u16) -> Result<u32> {
    let addr = RegisterAddress::new(addr)?;
    Ok(transport.read_reg(addr)?)
}

impl<T: RegisterTransport, D: DelayNs> Lan7801<T, D> {
    /// Wrap a transport with default wait budgets
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_timeouts(transport, delay, BusTimeouts::new())
    }

    /// Wrap a transport with explicit wait budgets
    pub fn with_timeouts(transport: T, delay: D, timeouts: BusTimeouts) -> Self {
        Self {
            transport,
            delay,
            timeouts,
        }
    }

    /// Current wait budgets
    pub const fn timeouts(&self) -> BusTimeouts {
        self.timeouts
    }

    /// Replace the wait budgets
    pub fn set_timeouts(&mut self, timeouts: BusTimeouts) {
        self.timeouts = timeouts;
    }

    /// Access the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Access the delay provider
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Release the transport and delay provider
    pub fn into_inner(self) -> (T, D) {
        (self.transport, self.delay)
    }

    // =========================================================================
    // CSR Access
    // =========================================================================

    /// Read a CSR
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRegisterAddress`] for `addr >= 0x1000`, raised
    /// before the transport is touched; transport errors otherwise.
    pub fn read_reg(&mut self, addr: u16) -> Result<u32> {
        read_csr(&mut self.transport, addr)
    }

    /// Write a CSR
    ///
    /// # Errors
    ///
    /// Same as [`read_reg`](Self::read_reg).
    pub fn write_reg(&mut self, addr: u16, value: u32) -> Result<()> {
        let addr = RegisterAddress::new(addr)?;
        self.transport.write_reg(addr, value)?;
        Ok(())
    }

    /// Set and clear bits of a CSR; returns the resulting value.
    ///
    /// No write is issued when the value is already as requested.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConflictingMasks`] if `set` and `clear` overlap.
    pub fn modify_reg(&mut self, addr: u16, set: u32, clear: u32) -> Result<u32> {
        if set & clear != 0 {
            return Err(ConfigError::ConflictingMasks.into());
        }
        let old = self.read_reg(addr)?;
        let new = (old & !clear) | set;
        if new != old {
            self.write_reg(addr, new)?;
        }
        Ok(new)
    }

    /// Poll a CSR until `mask` is entirely set (`want_set`) or clear.
    fn wait_bits(&mut self, addr: u16, mask: u32, want_set: bool, policy: PollPolicy) -> Result<()> {
        let Self {
            transport, delay, ..
        } = self;
        poll_until(delay, policy, Error::Io(IoError::Timeout), || {
            let value = read_csr(transport, addr)?;
            Ok(if want_set {
                value & mask == mask
            } else {
                value & mask == 0
            })
        })
    }

    // =========================================================================
    // Identification
    // =========================================================================

    /// Raw `ID_REV` value
    pub fn identifier(&mut self) -> Result<u32> {
        self.read_reg(reg::ID_REV)
    }

    /// Check that `ID_REV` carries the LAN7801 chip ID
    ///
    /// # Errors
    ///
    /// [`DeviceError::WrongMac`] with the value read.
    pub fn verify_id(&mut self) -> Result<u32> {
        let id = self.identifier()?;
        #[cfg(feature = "defmt")]
        defmt::debug!("lan7801: ID_REV = {:#010x}", id);
        if id >> id_rev::CHIP_ID_SHIFT != u32::from(MAC_CHIP_ID) {
            return Err(DeviceError::WrongMac(id).into());
        }
        Ok(id)
    }

    // =========================================================================
    // MAC Control
    // =========================================================================

    /// Enable the internal 125 MHz clock used as RGMII transmit clock
    pub fn enable_clock_125(&mut self) -> Result<()> {
        self.modify_reg(reg::HW_CFG, hw_cfg::CLK125_EN, 0)?;
        Ok(())
    }

    /// Enable or disable automatic speed detection
    pub fn set_auto_speed(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            self.modify_reg(reg::MAC_CR, mac_cr::ASD, 0)?;
        } else {
            self.modify_reg(reg::MAC_CR, 0, mac_cr::ASD)?;
        }
        Ok(())
    }

    /// Whether automatic speed detection is enabled
    pub fn auto_speed(&mut self) -> Result<bool> {
        Ok(self.read_reg(reg::MAC_CR)? & mac_cr::ASD != 0)
    }

    /// Program the 2-bit `MAC_CR` speed field (1 = 100 Mb/s, 2 = 1000 Mb/s)
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSpeedCode`] for codes above 3.
    pub fn set_speed_code(&mut self, code: u8) -> Result<()> {
        if code > mac_cr::SPEED_MAX {
            return Err(ConfigError::InvalidSpeedCode.into());
        }
        let field = u32::from(code) << mac_cr::SPEED_SHIFT;
        self.modify_reg(reg::MAC_CR, field, mac_cr::SPEED_MASK & !field)?;
        Ok(())
    }

    /// Current 2-bit `MAC_CR` speed field
    pub fn speed_code(&mut self) -> Result<u8> {
        let value = self.read_reg(reg::MAC_CR)?;
        Ok(((value & mac_cr::SPEED_MASK) >> mac_cr::SPEED_SHIFT) as u8)
    }

    /// Program the receive filter for promiscuous or filtered operation
    pub fn set_promiscuous(&mut self, enabled: bool) -> Result<()> {
        let value = if enabled {
            rfe_ctl::PROMISCUOUS
        } else {
            rfe_ctl::FILTERED
        };
        self.write_reg(reg::RFE_CTL, value)
    }

    /// Whether the receive filter accepts all unicast frames
    pub fn is_promiscuous(&mut self) -> Result<bool> {
        Ok(self.read_reg(reg::RFE_CTL)? & rfe_ctl::UNICAST_ALL != 0)
    }

    /// Program the station address
    pub fn set_mac_address(&mut self, mac: MacAddress) -> Result<()> {
        self.write_reg(reg::RX_ADDRH, u32::from(mac.high()))?;
        self.write_reg(reg::RX_ADDRL, mac.low())
    }

    /// Read back the station address
    pub fn mac_address(&mut self) -> Result<MacAddress> {
        let high = (self.read_reg(reg::RX_ADDRH)? as u16).to_be_bytes();
        let low = self.read_reg(reg::RX_ADDRL)?.to_be_bytes();
        Ok(MacAddress::new([
            high[0], high[1], low[0], low[1], low[2], low[3],
        ]))
    }

    /// Drive the activity GPIO
    pub fn set_activity_gpio(&mut self, high: bool) -> Result<()> {
        let value = if high {
            gpio_cfg0::ACTIVITY_HIGH
        } else {
            gpio_cfg0::ACTIVITY_LOW
        };
        self.write_reg(reg::GPIO_CFG0, value)
    }

    // =========================================================================
    // Datapath Control
    // =========================================================================

    /// Stop both the receive and transmit paths.
    ///
    /// Requests the stop on both paths, waits for each enable bit to drop,
    /// then re-asserts the request since the disabled state is latched.
    pub fn stop_datapath(&mut self) -> Result<()> {
        let policy = self.timeouts.datapath;
        for path in [reg::MAC_RX, reg::MAC_TX] {
            self.request_path_stop(path)?;
        }
        for path in [reg::MAC_RX, reg::MAC_TX] {
            self.wait_bits(path, mac_path::ENABLE, false, policy)?;
        }
        for path in [reg::MAC_RX, reg::MAC_TX] {
            self.request_path_stop(path)?;
        }
        Ok(())
    }

    /// Re-enable both paths and wait until each reports enabled.
    pub fn start_datapath(&mut self) -> Result<()> {
        let policy = self.timeouts.datapath;
        for path in [reg::MAC_RX, reg::MAC_TX] {
            let value = self.read_reg(path)?;
            self.write_reg(path, (value & !mac_path::DISABLE) | mac_path::ENABLE)?;
        }
        for path in [reg::MAC_RX, reg::MAC_TX] {
            self.wait_bits(path, mac_path::ENABLE, true, policy)?;
        }
        Ok(())
    }

    fn request_path_stop(&mut self, path: u16) -> Result<()> {
        let value = self.read_reg(path)?;
        self.write_reg(path, (value & !mac_path::ENABLE) | mac_path::DISABLE)
    }

    // =========================================================================
    // MII Management
    // =========================================================================

    fn wait_mii_idle(&mut self) -> Result<()> {
        let policy = self.timeouts.mdio;
        self.wait_bits(reg::MII_ACC, mii_acc::BUSY, false, policy)
    }

    /// Poll the EEPROM controller busy bit
    pub(super) fn wait_eeprom_idle(&mut self) -> Result<()> {
        let policy = self.timeouts.eeprom;
        self.wait_bits(reg::E2P_CMD, e2p_cmd::BUSY, false, policy)
    }
}

/// `MII_ACC` value starting an access
const fn mii_access(phy_addr: u8, reg_addr: u8, opcode: u32) -> u32 {
    (phy_addr as u32) << mii_acc::PHY_ADDR_SHIFT | (reg_addr as u32) << mii_acc::REG_ADDR_SHIFT | opcode
}

impl<T: RegisterTransport, D: DelayNs> MdioBus for Lan7801<T, D> {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        check_c22(phy_addr, reg_addr)?;
        self.wait_mii_idle()?;
        self.write_reg(reg::MII_ACC, mii_access(phy_addr, reg_addr, mii_acc::OP_READ))?;
        self.wait_mii_idle()?;
        Ok((self.read_reg(reg::MII_DATA)? & mii_data::DATA_MASK) as u16)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        check_c22(phy_addr, reg_addr)?;
        self.wait_mii_idle()?;
        self.write_reg(reg::MII_DATA, u32::from(value))?;
        self.write_reg(reg::MII_ACC, mii_access(phy_addr, reg_addr, mii_acc::OP_WRITE))?;
        self.wait_mii_idle()
    }
}

impl<T: RegisterTransport, D: DelayNs> MmdBus for Lan7801<T, D> {}

// =============================================================================
// Unit Tests
// =============================================================================
