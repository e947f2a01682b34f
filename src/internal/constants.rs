//! Centralized Constants
//!
//! Single source of truth for the identifiers, USB/driver protocol values
//! and wait budgets used throughout the HydraLink driver.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Identification**: USB IDs, expected chip identifiers, PHY address
//! - **USB vendor requests**: Control-transfer request codes
//! - **Privileged driver**: Device path, control code, request framing
//! - **Timing**: Default bounded-wait budgets
//!
//! Register bit definitions stay in `lan7801_regs` and `bcm89881_regs`.

// =============================================================================
// Identification
// =============================================================================

/// USB vendor ID of the LAN7801 (Microchip)
pub const USB_VENDOR_ID: u16 = 0x0424;

/// USB product ID of the LAN7801
pub const USB_PRODUCT_ID: u16 = 0x7801;

/// Expected chip ID in the upper half of `ID_REV`
pub const MAC_CHIP_ID: u16 = 0x7801;

/// Expected BCM89881 PMA/PMD identifier 1
pub const PHY_IDENTIFIER: u16 = 0xAE02;

/// MDIO address of the BCM89881 on the HydraLink board
pub const HYDRALINK_PHY_ADDR: u8 = 0;

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid Clause-22 register index (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Maximum valid MMD device address (5-bit field)
pub const MAX_DEVAD: u8 = 31;

/// Maximum valid EEPROM byte address (9-bit field)
pub const MAX_EEPROM_ADDR: u16 = 0x1FF;

/// MAC address length in bytes
pub const MAC_ADDR_LEN: usize = 6;

// =============================================================================
// USB Vendor Requests
// =============================================================================

/// Host-to-device, vendor, device recipient
pub const USB_REQUEST_TYPE_OUT: u8 = 0x40;

/// Device-to-host, vendor, device recipient
pub const USB_REQUEST_TYPE_IN: u8 = 0xC0;

/// Vendor request: write a CSR
pub const USB_REQUEST_WRITE_REGISTER: u8 = 0xA0;

/// Vendor request: read a CSR
pub const USB_REQUEST_READ_REGISTER: u8 = 0xA1;

/// CSR payload size in bytes
pub const REGISTER_WIDTH: usize = 4;

// =============================================================================
// Privileged Driver (ioctl) Protocol
// =============================================================================

/// Device path exposed by the vendor driver
pub const IOCTL_DEVICE_PATH: &str = "\\\\.\\LAN7800_IOCTL";

/// Control code for every request
pub const IOCTL_CONTROL_CODE: u32 = 0x0012_2400;

/// Request selector when the driver picks the adapter
pub const IOCTL_SELECT_DEFAULT: u32 = 0x0001_0002;

/// Request selector when an interface index is given
pub const IOCTL_SELECT_INDEXED: u32 = 0x0002_0001;

/// Opcode: read a CSR
pub const IOCTL_OP_READ_REGISTER: u32 = 0x08;

/// Opcode: write a CSR
pub const IOCTL_OP_WRITE_REGISTER: u32 = 0x09;

/// Opcode: fetch the adapter registry key
pub const IOCTL_OP_ADAPTER_KEY: u32 = 0x12;

/// Shared request/response buffer size
pub const IOCTL_BUFFER_SIZE: usize = 0x1000;

/// Response header length; payload starts here
pub const IOCTL_HEADER_LEN: usize = 16;

/// Byte offset of the status word in a response
pub const IOCTL_STATUS_OFFSET: usize = 8;

/// Driver status: success
pub const IOCTL_STATUS_OK: u32 = 0;

/// Driver status: adapter busy, retry
pub const IOCTL_STATUS_BUSY: u32 = 4;

/// Expected payload length of a write response
pub const IOCTL_WRITE_ACK_LEN: usize = 1;

/// Number of adapter indices external discovery probes
pub const IOCTL_MAX_INTERFACES: u32 = 80;

// =============================================================================
// Timing
// =============================================================================

/// Default MDIO busy-bit budget in microseconds
pub const MDIO_TIMEOUT_US: u32 = 100_000;

/// Default EEPROM controller busy-bit budget in microseconds
pub const EEPROM_TIMEOUT_US: u32 = 1_000_000;

/// Default TX/RX datapath state-change budget in microseconds
pub const DATAPATH_TIMEOUT_US: u32 = 100_000;

/// Default interval between register polls in microseconds
pub const POLL_INTERVAL_US: u32 = 100;

/// Default driver busy-retry deadline in microseconds
pub const DRIVER_BUSY_TIMEOUT_US: u32 = 5_000_000;

/// Default interval between driver busy retries in microseconds
pub const DRIVER_RETRY_INTERVAL_US: u32 = 1_000;
