//! Core driver components for the HydraLink adapter.
//!
//! This module contains the building blocks for identifying and configuring
//! the adapter:
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`error`] - Error types and result aliases
//! - [`mac`] - The LAN7801 controller: CSRs, datapath and MII management
//! - [`eeprom`] - The LAN7801 EEPROM program controller
//! - [`events`] - Progress events reported during setup
//! - [`link`] - The combined MAC + PHY configurator
//!
//! # Example
//!
//! ```ignore
//! use hydralink::driver::{LinkConfig, Speed};
//!
//! let config = LinkConfig::new()
//!     .with_speed(Speed::Mbps1000)
//!     .with_master(true);
//! ```

// Submodules
pub mod config;
pub mod eeprom;
pub mod error;
pub mod events;
pub mod link;
pub mod mac;

// Re-exports for convenience
pub use config::{BusTimeouts, LinkConfig, MacAddress, Speed};
pub use eeprom::EepromCommand;
pub use error::{
    ConfigError, ConfigResult, DeviceError, Error, IoError, IoResult, Result,
};
#[cfg(feature = "log")]
pub use events::LogEvents;
pub use events::{EventSink, LinkEvent, NoEvents};
pub use link::{HydraLink, LinkState};
pub use mac::Lan7801;
