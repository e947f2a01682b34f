//! HydraLink Configuration Driver
//!
//! A `no_std`, `no_alloc` driver for the HydraLink automotive Ethernet
//! adapter: a Microchip LAN7801 USB 3.1 to RGMII bridge with a Broadcom
//! BCM89881 100/1000BASE-T1 PHY behind its MII management controller.
//!
//! The crate identifies both chips and applies a link configuration (speed,
//! master/slave role, promiscuous mode, MAC address) while respecting the
//! adapter's timing rules: bounded busy waits on every hardware flag, the PHY
//! held in reset for the whole transaction, and the TX/RX datapath stopped
//! around a speed change.
//!
//! # Architecture
//!
//! The driver is organized into layers, each depending only on the one below:
//!
//! 1. **Link Layer** ([`HydraLink`]): Sequences a full configuration transaction
//! 2. **PHY Layer** ([`phy`]): BCM89881 Clause-45 register access and controls
//! 3. **MAC Layer** ([`Lan7801`]): CSR access, MDIO bus protocol, EEPROM protocol
//! 4. **HAL Layer** ([`hal`]): Register transports, MDIO traits, bounded waits
//!
//! How a CSR access reaches the device is the caller's choice: implement
//! [`ControlPipe`](hal::ControlPipe) for a USB control-transfer session, or
//! [`DriverChannel`](hal::DriverChannel) for the vendor's privileged driver.
//! Device discovery and handle opening stay outside the crate.
//!
//! # Features
//!
//! - `std`: Host conveniences ([`hal::StdDelay`])
//! - `defmt`: Enable defmt formatting and low-level trace output
//! - `log`: Enable the [`LogEvents`] sink forwarding to the `log` facade
//! - `critical-section`: Enable the shared `SharedHydraLink` wrapper
//!
//! # Example
//!
//! ```ignore
//! use hydralink::{HydraLink, Lan7801, LinkConfig, Speed, UsbTransport};
//! use hydralink::hal::StdDelay;
//!
//! // Your ControlPipe implementation (e.g. on top of a USB library)
//! let pipe = /* open the LAN7801's default control pipe */;
//!
//! let mac = Lan7801::new(UsbTransport::new(pipe), StdDelay::new());
//! let mut link = HydraLink::new(mac)?;
//!
//! let config = LinkConfig::new()
//!     .with_speed(Speed::Mbps1000)
//!     .with_master(true)
//!     .with_mac_address_str("02:00:00:12:34:56")?;
//!
//! link.setup(&config)?;
//! let state = link.status()?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

#[cfg(feature = "std")]
extern crate std;

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{BusTimeouts, LinkConfig, MacAddress, Speed};
pub use driver::eeprom::EepromCommand;
pub use driver::error::{
    ConfigError, ConfigResult, DeviceError, Error, IoError, IoResult, Result,
};
#[cfg(feature = "log")]
#[cfg_attr(docsrs, doc(cfg(feature = "log")))]
pub use driver::events::LogEvents;
pub use driver::events::{EventSink, LinkEvent, NoEvents};
pub use driver::link::{HydraLink, LinkState};
pub use driver::mac::Lan7801;

// Re-export transports and the PHY driver
pub use hal::{IoctlTransport, PollPolicy, RegisterTransport, UsbTransport};
pub use phy::Bcm89881;

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedHydraLink;

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Timing
        DATAPATH_TIMEOUT_US,
        DRIVER_BUSY_TIMEOUT_US,
        DRIVER_RETRY_INTERVAL_US,
        EEPROM_TIMEOUT_US,
        // Identification
        HYDRALINK_PHY_ADDR,
        // Privileged driver
        IOCTL_CONTROL_CODE,
        IOCTL_DEVICE_PATH,
        IOCTL_MAX_INTERFACES,
        MAC_ADDR_LEN,
        MAC_CHIP_ID,
        MAX_EEPROM_ADDR,
        MDIO_TIMEOUT_US,
        PHY_IDENTIFIER,
        POLL_INTERVAL_US,
        // USB
        USB_PRODUCT_ID,
        USB_VENDOR_ID,
    };
}
