//! Serialised Access
//!
//! A HydraLink transaction (a Clause-45 access, a speed change, a whole
//! setup) is a sequence of dependent register accesses that must not be
//! interleaved with another transaction on the same device. A single-owner
//! [`HydraLink`](crate::HydraLink) gets this for free; when several
//! threads or interrupt handlers share one device, wrap it in a
//! [`SharedHydraLink`].
//!
//! # Feature Flags
//!
//! - `critical-section`: enables this module
//!
//! # Example
//!
//! ```ignore
//! use hydralink::sync::SharedHydraLink;
//!
//! static LINK: SharedHydraLink<Transport, Delay> = SharedHydraLink::empty();
//!
//! LINK.install(HydraLink::new(mac)?);
//! LINK.with(|link| link.setup(&config)).transpose()?;
//! ```

mod shared;

pub use shared::SharedHydraLink;
