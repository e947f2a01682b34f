//! LAN7801 System Control and Status Register Definitions
//!
//! Register addresses and bit fields of the LAN7801 USB 3.1 to RGMII
//! Ethernet bridge, as reached through the vendor register-access requests.
//! Only the registers the configuration path touches are listed.
//!
//! # Module Organization
//!
//! - `reg`: Register addresses (12-bit CSR space)
//! - `id_rev`: Chip identifier register
//! - `hw_cfg`: Hardware configuration bits
//! - `gpio_cfg0`: GPIO configuration bits
//! - `e2p_cmd`: EEPROM controller command register
//! - `rfe_ctl`: Receive filtering engine values
//! - `mac_cr`: MAC control register bits
//! - `mac_path`: Shared layout of `MAC_RX` / `MAC_TX`
//! - `mii_acc`: MII management access register
//!
//! # References
//!
//! - LAN7801 Datasheet (DS00002123)

// =============================================================================
// Register Addresses
// =============================================================================

/// CSR addresses
pub mod reg {
    /// Chip ID and revision
    pub const ID_REV: u16 = 0x000;
    /// Hardware configuration
    pub const HW_CFG: u16 = 0x010;
    /// GPIO configuration 0
    pub const GPIO_CFG0: u16 = 0x01C;
    /// EEPROM command
    pub const E2P_CMD: u16 = 0x040;
    /// EEPROM data
    pub const E2P_DATA: u16 = 0x044;
    /// Receive filtering engine control
    pub const RFE_CTL: u16 = 0x0B0;
    /// MAC control
    pub const MAC_CR: u16 = 0x100;
    /// MAC receive
    pub const MAC_RX: u16 = 0x104;
    /// MAC transmit
    pub const MAC_TX: u16 = 0x108;
    /// MAC receive address high (bytes 0..2)
    pub const RX_ADDRH: u16 = 0x118;
    /// MAC receive address low (bytes 2..6)
    pub const RX_ADDRL: u16 = 0x11C;
    /// MII management access
    pub const MII_ACC: u16 = 0x120;
    /// MII management data
    pub const MII_DATA: u16 = 0x124;

    /// Size of the CSR address space (12-bit)
    pub const SPACE_SIZE: u16 = 0x1000;
}

// =============================================================================
// Bit Fields
// =============================================================================

/// `ID_REV` fields
pub mod id_rev {
    /// Chip ID position
    pub const CHIP_ID_SHIFT: u32 = 16;
}

/// `HW_CFG` bits
pub mod hw_cfg {
    /// Enable the internal 125 MHz reference clock (RGMII TX clock source)
    pub const CLK125_EN: u32 = 1 << 25;
}

/// `GPIO_CFG0` bits used for the activity output
pub mod gpio_cfg0 {
    /// Output buffer type for GPIO 0 (push-pull)
    pub const GPIOBUF0: u32 = 1 << 16;
    /// Direction for GPIO 0 (output)
    pub const GPIODIR0: u32 = 1 << 8;
    /// Data for GPIO 0
    pub const GPIOD0: u32 = 1 << 0;
    /// Activity output configured, driven low
    pub const ACTIVITY_LOW: u32 = GPIOBUF0 | GPIODIR0;
    /// Activity output configured, driven high
    pub const ACTIVITY_HIGH: u32 = GPIOBUF0 | GPIODIR0 | GPIOD0;
}

/// `E2P_CMD` fields
pub mod e2p_cmd {
    /// Command in progress
    pub const BUSY: u32 = 1 << 31;
    /// Command field position (bits 30:28)
    pub const CMD_SHIFT: u32 = 28;
    /// Command field mask (pre-shift)
    pub const CMD_MASK: u32 = 0b111;
    /// EEPROM address mask (bits 8:0)
    pub const ADDR_MASK: u32 = 0x1FF;
}

/// `E2P_DATA` fields
pub mod e2p_data {
    /// Data byte mask
    pub const DATA_MASK: u32 = 0xFF;
}

/// `RFE_CTL` values
pub mod rfe_ctl {
    /// Accept every unicast frame
    pub const UNICAST_ALL: u32 = 1 << 8;
    /// Promiscuous filter programming
    pub const PROMISCUOUS: u32 = 0x1F80;
    /// Normal (filtered) programming
    pub const FILTERED: u32 = 0x1C8A;
}

/// `MAC_CR` fields
pub mod mac_cr {
    /// Automatic speed detection
    pub const ASD: u32 = 1 << 11;
    /// Speed field position (bits 2:1)
    pub const SPEED_SHIFT: u32 = 1;
    /// Speed field mask (in place)
    pub const SPEED_MASK: u32 = 0b11 << SPEED_SHIFT;
    /// Speed code for 100 Mb/s
    pub const SPEED_100: u8 = 0b01;
    /// Speed code for 1000 Mb/s
    pub const SPEED_1000: u8 = 0b10;
    /// Largest speed code the field accepts
    pub const SPEED_MAX: u8 = 0b11;
}

/// Layout shared by `MAC_RX` and `MAC_TX`
pub mod mac_path {
    /// Path enabled (`RXEN` / `TXEN`)
    pub const ENABLE: u32 = 1 << 0;
    /// Disable request, latched while the path is stopped (`RXD` / `TXD`)
    pub const DISABLE: u32 = 1 << 1;
}

/// `MII_ACC` fields
pub mod mii_acc {
    /// Operation in progress
    pub const BUSY: u32 = 1 << 0;
    /// Write operation when set
    pub const WRITE: u32 = 1 << 1;
    /// Read opcode (busy only)
    pub const OP_READ: u32 = BUSY;
    /// Write opcode (write + busy)
    pub const OP_WRITE: u32 = WRITE | BUSY;
    /// PHY address position (bits 15:11)
    pub const PHY_ADDR_SHIFT: u32 = 11;
    /// Register index position (bits 10:6)
    pub const REG_ADDR_SHIFT: u32 = 6;
}

/// `MII_DATA` fields
pub mod mii_data {
    /// 16-bit data mask
    pub const DATA_MASK: u32 = 0xFFFF;
}
