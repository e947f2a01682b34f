//! Hardware Abstraction Layer
//!
//! Everything between the driver and the wire: how a CSR access reaches the
//! LAN7801, how an MDIO transaction reaches the PHY, and how the driver
//! waits for hardware.
//!
//! # Modules
//!
//! - [`transport`]: The [`RegisterTransport`] seam and validated CSR addresses
//! - [`usb`]: CSR access through vendor control transfers
//! - [`ioctl`]: CSR access through the vendor's privileged driver
//! - [`mdio`]: Clause-22 bus trait with Clause-45 emulation
//! - [`poll`]: Bounded busy-wait helper
//! - `delay`: Sleeping [`DelayNs`](embedded_hal::delay::DelayNs) (feature `std`)
//!
//! # Delay Integration
//!
//! All types that wait use `embedded_hal::delay::DelayNs` directly. Pass any
//! delay implementation from your HAL, or `StdDelay` on a host.

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod delay;
pub mod ioctl;
pub mod mdio;
pub mod poll;
pub mod transport;
pub mod usb;

// Re-export commonly used types
#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use ioctl::{DriverChannel, IoctlTransport};
pub use mdio::{MdioBus, MmdBus};
pub use poll::PollPolicy;
pub use transport::{RegisterAddress, RegisterTransport};
pub use usb::{ControlPipe, UsbTransport};
