//! BCM89881 Register Definitions
//!
//! Clause-45 register addresses and bit fields of the Broadcom BCM89881
//! 100/1000BASE-T1 automotive Ethernet PHY. Almost everything lives in the
//! PMA/PMD device (DEVAD 1).
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `devad`: MMD device addresses
//! - `reg`: PMA/PMD register addresses
//! - `pma_ctrl1`: PMA/PMD control 1 bits
//! - `t1_ctrl`: BASE-T1 PMA/PMD control bits
//! - `setup`: Fixed RGMII and LED programming
//! - `blink`: LED override values used to flash the LEDs
//!
//! # References
//!
//! - IEEE 802.3 Clause 45 (PMA/PMD registers, BASE-T1 extensions)

// =============================================================================
// PHY Identifier
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// PMA/PMD device identifier 1 (DEVAD 1, register 2)
    pub const ID1: u16 = crate::internal::constants::PHY_IDENTIFIER;
}

/// MMD device addresses
pub mod devad {
    /// PMA/PMD
    pub const PMA_PMD: u8 = 1;
    /// Vendor specific 1 (strap registers)
    pub const VENDOR_1: u8 = 0x1E;
}

// =============================================================================
// Register Addresses
// =============================================================================

/// PMA/PMD register addresses (DEVAD 1 unless noted)
pub mod reg {
    /// PMA/PMD control 1
    pub const PMA_CTRL1: u16 = 0x0000;
    /// PMA/PMD status 1
    pub const PMA_STAT1: u16 = 0x0001;
    /// PMA/PMD device identifier 1
    pub const DEV_ID1: u16 = 0x0002;
    /// PMA/PMD device identifier 2
    pub const DEV_ID2: u16 = 0x0003;
    /// PMA/PMD speed ability
    pub const SPEED_ABILITY: u16 = 0x0004;
    /// Devices in package 1
    pub const DEV_IN_PKG1: u16 = 0x0005;
    /// Devices in package 2
    pub const DEV_IN_PKG2: u16 = 0x0006;
    /// PMA/PMD control 2
    pub const PMA_CTRL2: u16 = 0x0007;
    /// PMA/PMD status 2
    pub const PMA_STAT2: u16 = 0x0008;
    /// PMA/PMD transmit disable
    pub const TX_DISABLE: u16 = 0x0009;
    /// PMD receive signal detect
    pub const RX_SIGNAL_DETECT: u16 = 0x000A;
    /// PMA/PMD extended ability
    pub const EXT_ABILITY: u16 = 0x000B;
    /// Package identifier 1
    pub const PKG_ID1: u16 = 0x000E;
    /// Package identifier 2
    pub const PKG_ID2: u16 = 0x000F;
    /// Strap SGMII register 1 (DEVAD 0x1E)
    pub const STRAP_SGMII1: u16 = 0x0010;
    /// BASE-T1 PMA/PMD extended ability
    pub const T1_EXT_ABILITY: u16 = 0x0012;
    /// BASE-T1 PMA/PMD control
    pub const T1_CTRL: u16 = 0x0834;
    /// 100BASE-T1 PMA/PMD test mode control
    pub const T1_100_PMA: u16 = 0x0836;
    /// 1000BASE-T1 PMA control
    pub const T1_1000_PMA_CTRL: u16 = 0x0900;
    /// 1000BASE-T1 PMA status
    pub const T1_1000_PMA_STAT: u16 = 0x0901;
    /// 1000BASE-T1 training
    pub const T1_1000_TRAINING: u16 = 0x0902;
    /// 1000BASE-T1 link partner training
    pub const T1_1000_LP_TRAINING: u16 = 0x0903;
    /// 1000BASE-T1 test mode control
    pub const T1_1000_TEST_MODE: u16 = 0x0904;
    /// Current mean square error
    pub const CURRENT_MSE: u16 = 0x8007;
    /// LED override control A
    pub const LED_OVERRIDE_A: u16 = 0x931D;
    /// LED override control B
    pub const LED_OVERRIDE_B: u16 = 0x931E;
    /// RGMII control
    pub const RGMII_CTRL: u16 = 0xA010;
    /// RGMII control 2
    pub const RGMII_CTRL2: u16 = 0xA011;
    /// RGMII/SGMII regulator select
    pub const RGMII_SGMII_SEL: u16 = 0xA015;
    /// LED and interrupt control
    pub const LED_INTR_CTRL: u16 = 0xA027;
}

// =============================================================================
// Bit Fields
// =============================================================================

/// PMA/PMD control 1 bits
pub mod pma_ctrl1 {
    /// Hold the PMA/PMD in reset
    pub const RESET: u16 = 1 << 15;
    /// Speed selection LSB
    pub const SPEED_SEL_LSB: u16 = 1 << 13;
    /// Speed selection MSB
    pub const SPEED_SEL_MSB: u16 = 1 << 6;
    /// Both speed selection bits
    pub const SPEED_SEL_MASK: u16 = SPEED_SEL_LSB | SPEED_SEL_MSB;
    /// Selection pattern for 100 Mb/s
    pub const SPEED_100: u16 = SPEED_SEL_LSB;
    /// Selection pattern for 1000 Mb/s
    pub const SPEED_1000: u16 = SPEED_SEL_MSB;
}

/// BASE-T1 PMA/PMD control bits
pub mod t1_ctrl {
    /// Operate as master
    pub const MASTER: u16 = 1 << 14;
}

/// Fixed programming applied during link setup
pub mod setup {
    /// RGMII control: enable RGMII
    pub const RGMII_CTRL: u16 = 0x0001;
    /// Regulator select: 3.3 V RGMII
    pub const RGMII_SGMII_SEL: u16 = 0x0000;
    /// LED and interrupt control
    pub const LED_INTR_CTRL: u16 = 0x0F15;
    /// LED override A default
    pub const LED_OVERRIDE_A: u16 = 0x0010;
    /// LED override B default
    pub const LED_OVERRIDE_B: u16 = 0x0063;
}

/// LED override values used by the blink sequence
pub mod blink {
    /// First half: override B
    pub const ON_B: u16 = 0x006F;
    /// First half: override A, step 1
    pub const ON_A1: u16 = 0x00EF;
    /// First half: override A, step 2
    pub const ON_A2: u16 = 0x00FF;
    /// Second half: override B
    pub const OFF_B: u16 = 0x006E;
    /// Second half: override A, step 1
    pub const OFF_A1: u16 = 0x00FE;
    /// Second half: override A, step 2
    pub const OFF_A2: u16 = 0x00EE;
}
