//! Link configuration events
//!
//! [`HydraLink`](super::link::HydraLink) reports progress through an
//! [`EventSink`] instead of printing. A setup run emits one event per phase
//! it completes, in phase order.

use super::config::{MacAddress, Speed};
use super::error::Error;

/// Progress reported while identifying and configuring a HydraLink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Both chips answered with the expected identifiers
    Identified {
        /// `ID_REV` of the MAC
        mac_id: u32,
        /// PMA/PMD device identifier 1 of the PHY
        phy_id: u16,
    },
    /// PHY PMA/PMD held in reset
    ResetAsserted,
    /// Clock, RGMII and LED defaults programmed
    PlatformConfigured,
    /// Receive filter programmed
    PromiscuousSet(bool),
    /// Station address programmed
    MacAddressSet(MacAddress),
    /// TX and RX paths stopped for a speed change
    DatapathStopped,
    /// MAC and PHY speed programmed
    SpeedSet(Speed),
    /// TX and RX paths running again
    DatapathResumed,
    /// Restarting TX and RX after a failed speed change failed as well
    RestartFailed(Error),
    /// BASE-T1 role programmed
    RoleSet {
        /// `true` for master
        master: bool,
    },
    /// PHY PMA/PMD released from reset
    ResetReleased,
    /// Releasing the reset after a failed setup failed as well
    ReleaseFailed(Error),
}

/// Receiver of [`LinkEvent`]s
pub trait EventSink {
    /// Called once per event
    fn on_event(&mut self, event: &LinkEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoEvents;

impl EventSink for NoEvents {
    fn on_event(&mut self, _event: &LinkEvent) {}
}

impl<F: FnMut(&LinkEvent)> EventSink for F {
    fn on_event(&mut self, event: &LinkEvent) {
        self(event);
    }
}

/// Sink forwarding events to the `log` facade
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogEvents;

#[cfg(feature = "log")]
impl EventSink for LogEvents {
    fn on_event(&mut self, event: &LinkEvent) {
        match event {
            LinkEvent::Identified { mac_id, phy_id } => {
                log::info!("hydralink: MAC id {mac_id:#010x}, PHY id {phy_id:#06x}");
            }
            LinkEvent::ResetAsserted => log::debug!("hydralink: PHY held in reset"),
            LinkEvent::PlatformConfigured => log::debug!("hydralink: clock, RGMII and LEDs set"),
            LinkEvent::PromiscuousSet(on) => log::info!("hydralink: promiscuous = {on}"),
            LinkEvent::MacAddressSet(mac) => log::info!("hydralink: MAC address {mac}"),
            LinkEvent::DatapathStopped => log::debug!("hydralink: TX/RX stopped"),
            LinkEvent::SpeedSet(speed) => log::info!("hydralink: speed {speed}"),
            LinkEvent::DatapathResumed => log::debug!("hydralink: TX/RX running"),
            LinkEvent::RestartFailed(err) => {
                log::warn!("hydralink: TX/RX may still be stopped: {err}");
            }
            LinkEvent::RoleSet { master } => {
                log::info!(
                    "hydralink: role {}",
                    if *master { "master" } else { "slave" }
                );
            }
            LinkEvent::ResetReleased => log::debug!("hydralink: PHY out of reset"),
            LinkEvent::ReleaseFailed(err) => {
                log::warn!("hydralink: PHY may still be in reset: {err}");
            }
        }
    }
}
