//! Ethernet PHY Drivers
//!
//! The PHY layer talks to its chip only through [`MmdBus`], so a driver can
//! be exercised against any MDIO implementation: the LAN7801's MII
//! controller in production, a mock in tests.
//!
//! # Supported PHY Chips
//!
//! - [`Bcm89881`]: Broadcom BCM89881 100/1000BASE-T1 automotive PHY
//!
//! # Example
//!
//! ```ignore
//! use hydralink::phy::Bcm89881;
//! use hydralink::Speed;
//!
//! let phy = Bcm89881::new(0)?;
//! phy.verify_id(&mut mdio)?;
//! phy.set_speed(&mut mdio, Speed::Mbps1000)?;
//! phy.set_master(&mut mdio, true)?;
//! ```
//!
//! [`MmdBus`]: crate::hal::mdio::MmdBus

pub mod bcm89881;

pub use bcm89881::{Bcm89881, DIAGNOSTIC_REGISTERS, DiagnosticRegister};
