//! Link configuration types
//!
//! [`LinkConfig`] carries the optional settings applied by
//! [`HydraLink::setup`](crate::driver::link::HydraLink::setup). Every field
//! is validated when it is set, so a constructed configuration can always
//! be applied without further input checks.
//!
//! [`BusTimeouts`] holds the budgets of the bounded waits performed by the
//! MAC register file.

use core::fmt;
use core::str::FromStr;

use super::error::{ConfigError, ConfigResult};
use crate::hal::poll::PollPolicy;
use crate::internal::constants::{
    DATAPATH_TIMEOUT_US, EEPROM_TIMEOUT_US, MAC_ADDR_LEN, MDIO_TIMEOUT_US, POLL_INTERVAL_US,
};
use crate::internal::lan7801_regs::mac_cr;

// =============================================================================
// Speed
// =============================================================================

/// BASE-T1 link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 100BASE-T1
    #[default]
    Mbps100,
    /// 1000BASE-T1
    Mbps1000,
}

impl Speed {
    /// Parse a speed given in Mb/s
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedSpeed`] for anything but 100 or 1000.
    pub const fn from_mbps(mbps: u32) -> ConfigResult<Self> {
        match mbps {
            100 => Ok(Speed::Mbps100),
            1000 => Ok(Speed::Mbps1000),
            _ => Err(ConfigError::UnsupportedSpeed),
        }
    }

    /// Speed in Mb/s
    pub const fn as_mbps(self) -> u32 {
        match self {
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }

    /// LAN7801 `MAC_CR` speed code
    pub const fn mac_code(self) -> u8 {
        match self {
            Speed::Mbps100 => mac_cr::SPEED_100,
            Speed::Mbps1000 => mac_cr::SPEED_1000,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Mbps100 => f.write_str("100 Mb/s"),
            Speed::Mbps1000 => f.write_str("1 Gb/s"),
        }
    }
}

// =============================================================================
// MAC Address
// =============================================================================

/// Station MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress([u8; MAC_ADDR_LEN]);

impl MacAddress {
    /// Wrap raw octets
    pub const fn new(octets: [u8; MAC_ADDR_LEN]) -> Self {
        Self(octets)
    }

    /// Raw octets
    pub const fn octets(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }

    /// `RX_ADDRH` value: octets 0..2, big-endian
    pub const fn high(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }

    /// `RX_ADDRL` value: octets 2..6, big-endian
    pub const fn low(&self) -> u32 {
        u32::from_be_bytes([self.0[2], self.0[3], self.0[4], self.0[5]])
    }

    /// Parse `"xx:xx:xx:xx:xx:xx"`.
    ///
    /// Each group must be exactly two hex digits (either case).
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedMacAddress`] for any other shape.
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let mut octets = [0u8; MAC_ADDR_LEN];
        let mut groups = text.split(':');

        for octet in &mut octets {
            let group = groups.next().ok_or(ConfigError::MalformedMacAddress)?;
            *octet = parse_octet(group)?;
        }
        if groups.next().is_some() {
            return Err(ConfigError::MalformedMacAddress);
        }
        Ok(Self(octets))
    }
}

fn parse_octet(group: &str) -> ConfigResult<u8> {
    let bytes = group.as_bytes();
    if bytes.len() != 2 {
        return Err(ConfigError::MalformedMacAddress);
    }
    let hi = hex_digit(bytes[0])?;
    let lo = hex_digit(bytes[1])?;
    Ok(hi << 4 | lo)
}

fn hex_digit(c: u8) -> ConfigResult<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ConfigError::MalformedMacAddress),
    }
}

impl FromStr for MacAddress {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::parse(s)
    }
}

impl From<[u8; MAC_ADDR_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_ADDR_LEN]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

// =============================================================================
// Bus Timeouts
// =============================================================================

/// Budgets for the bounded waits of the MAC register file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTimeouts {
    /// MII management busy bit
    pub mdio: PollPolicy,
    /// EEPROM controller busy bit
    pub eeprom: PollPolicy,
    /// TX/RX datapath enable bits
    pub datapath: PollPolicy,
}

impl Default for BusTimeouts {
    fn default() -> Self {
        Self::new()
    }
}

impl BusTimeouts {
    /// Default budgets
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mdio: PollPolicy::new(MDIO_TIMEOUT_US, POLL_INTERVAL_US),
            eeprom: PollPolicy::new(EEPROM_TIMEOUT_US, POLL_INTERVAL_US),
            datapath: PollPolicy::new(DATAPATH_TIMEOUT_US, POLL_INTERVAL_US),
        }
    }

    /// Set the MII busy budget
    #[must_use]
    pub const fn with_mdio(mut self, policy: PollPolicy) -> Self {
        self.mdio = policy;
        self
    }

    /// Set the EEPROM busy budget
    #[must_use]
    pub const fn with_eeprom(mut self, policy: PollPolicy) -> Self {
        self.eeprom = policy;
        self
    }

    /// Set the datapath budget
    #[must_use]
    pub const fn with_datapath(mut self, policy: PollPolicy) -> Self {
        self.datapath = policy;
        self
    }
}

// =============================================================================
// Link Configuration
// =============================================================================

/// Settings applied by a link setup
///
/// Every field is optional; `None` leaves the corresponding hardware state
/// untouched. The fixed clock, RGMII and LED programming is applied
/// regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// BASE-T1 role: `true` master, `false` slave
    pub master: Option<bool>,
    /// Forced link speed
    pub speed: Option<Speed>,
    /// Station MAC address
    pub mac_address: Option<MacAddress>,
    /// Receive filter: `true` promiscuous, `false` filtered
    pub promiscuous: Option<bool>,
}

impl LinkConfig {
    /// Configuration that changes nothing beyond the fixed programming
    #[must_use]
    pub const fn new() -> Self {
        Self {
            master: None,
            speed: None,
            mac_address: None,
            promiscuous: None,
        }
    }

    /// Set the BASE-T1 role
    #[must_use]
    pub const fn with_master(mut self, master: bool) -> Self {
        self.master = Some(master);
        self
    }

    /// Set the link speed
    #[must_use]
    pub const fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the link speed from Mb/s
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedSpeed`] for anything but 100 or 1000.
    pub const fn with_speed_mbps(self, mbps: u32) -> ConfigResult<Self> {
        match Speed::from_mbps(mbps) {
            Ok(speed) => Ok(self.with_speed(speed)),
            Err(e) => Err(e),
        }
    }

    /// Set the station MAC address
    #[must_use]
    pub const fn with_mac_address(mut self, mac: MacAddress) -> Self {
        self.mac_address = Some(mac);
        self
    }

    /// Set the station MAC address from `"xx:xx:xx:xx:xx:xx"`
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedMacAddress`] if the text does not parse.
    pub fn with_mac_address_str(self, text: &str) -> ConfigResult<Self> {
        Ok(self.with_mac_address(MacAddress::parse(text)?))
    }

    /// Set the receive filter mode
    #[must_use]
    pub const fn with_promiscuous(mut self, enabled: bool) -> Self {
        self.promiscuous = Some(enabled);
        self
    }

    /// Build from loosely typed inputs, validating all of them up front.
    ///
    /// # Errors
    ///
    /// The first validation error encountered.
    pub fn from_parts(
        master: Option<bool>,
        speed_mbps: Option<u32>,
        mac_address: Option<&str>,
        promiscuous: Option<bool>,
    ) -> ConfigResult<Self> {
        Ok(Self {
            master,
            speed: speed_mbps.map(Speed::from_mbps).transpose()?,
            mac_address: mac_address.map(MacAddress::parse).transpose()?,
            promiscuous,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
