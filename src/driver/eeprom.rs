//! EEPROM Program Controller
//!
//! The LAN7801 reaches its configuration EEPROM through two CSRs: `E2P_CMD`
//! carries a busy flag, a 3-bit command and a 9-bit byte address, and
//! `E2P_DATA` carries the byte being transferred. Every command waits for
//! the controller to go idle before it is issued and again after.
//!
//! Writes and erases are bracketed by write-enable / write-disable so the
//! part is left write-protected afterwards.

use embedded_hal::delay::DelayNs;

use super::error::{ConfigError, Error, Result};
use super::mac::Lan7801;
use crate::hal::transport::RegisterTransport;
use crate::internal::constants::MAX_EEPROM_ADDR;
use crate::internal::lan7801_regs::{e2p_cmd, e2p_data, reg};

/// EPC command field values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EepromCommand {
    /// Read one byte into `E2P_DATA`
    Read = 0b000,
    /// Write-protect the array
    WriteDisable = 0b001,
    /// Allow writes and erases
    WriteEnable = 0b010,
    /// Write `E2P_DATA` to one byte
    Write = 0b011,
    /// Erase the whole array
    EraseAll = 0b110,
}

impl EepromCommand {
    /// `E2P_CMD` value issuing this command at `addr`
    pub const fn encode(self, addr: u16) -> u32 {
        e2p_cmd::BUSY
            | ((self as u32) & e2p_cmd::CMD_MASK) << e2p_cmd::CMD_SHIFT
            | (addr as u32 & e2p_cmd::ADDR_MASK)
    }
}

const fn check_eeprom_addr(addr: u16) -> Result<()> {
    if addr > MAX_EEPROM_ADDR {
        return Err(Error::Config(ConfigError::InvalidEepromAddress));
    }
    Ok(())
}

impl<T: RegisterTransport, D: DelayNs> Lan7801<T, D> {
    /// Issue one EPC command and wait for it to complete.
    pub fn eeprom_command(&mut self, command: EepromCommand, addr: u16) -> Result<()> {
        check_eeprom_addr(addr)?;
        self.wait_eeprom_idle()?;
        self.write_reg(reg::E2P_CMD, command.encode(addr))?;
        self.wait_eeprom_idle()
    }

    /// Read one EEPROM byte
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEepromAddress`] for addresses above `0x1FF`.
    pub fn eeprom_read(&mut self, addr: u16) -> Result<u8> {
        self.eeprom_command(EepromCommand::Read, addr)?;
        Ok((self.read_reg(reg::E2P_DATA)? & e2p_data::DATA_MASK) as u8)
    }

    /// Write one EEPROM byte
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEepromAddress`] for addresses above `0x1FF`.
    pub fn eeprom_write(&mut self, addr: u16, value: u8) -> Result<()> {
        check_eeprom_addr(addr)?;
        self.eeprom_command(EepromCommand::WriteEnable, 0)?;
        self.write_reg(reg::E2P_DATA, u32::from(value))?;
        self.eeprom_command(EepromCommand::Write, addr)?;
        self.eeprom_command(EepromCommand::WriteDisable, 0)
    }

    /// Erase the whole EEPROM
    pub fn eeprom_erase_all(&mut self) -> Result<()> {
        self.eeprom_command(EepromCommand::WriteEnable, 0)?;
        self.eeprom_command(EepromCommand::EraseAll, 0)?;
        self.eeprom_command(EepromCommand::WriteDisable, 0)
    }
}
