//! HydraLink Controller
//!
//! [`HydraLink`] pairs the LAN7801 register file with the BCM89881 behind
//! it and applies a [`LinkConfig`] as one transaction:
//!
//! 1. hold the PHY PMA/PMD in reset
//! 2. enable the 125 MHz clock, program RGMII and LED defaults on the PHY
//! 3. receive filter (if configured)
//! 4. station address (if configured)
//! 5. speed (if configured), with TX/RX stopped around the change
//! 6. BASE-T1 role (if configured)
//! 7. release the PHY reset
//!
//! All input validation happens when the [`LinkConfig`] is built, so a
//! setup never stops halfway for a bad argument. If an I/O error interrupts
//! phases 2 to 6 the reset is still released before the error is returned,
//! and a speed change that fails after stopping TX/RX restarts them first.
//!
//! # Example
//!
//! ```ignore
//! use hydralink::{HydraLink, Lan7801, LinkConfig, Speed, UsbTransport};
//!
//! let mac = Lan7801::new(UsbTransport::new(pipe), delay);
//! let mut link = HydraLink::new(mac)?;
//!
//! let config = LinkConfig::new()
//!     .with_master(true)
//!     .with_speed(Speed::Mbps1000)
//!     .with_mac_address_str("02:00:00:12:34:56")?;
//! link.setup(&config)?;
//! ```

use embedded_hal::delay::DelayNs;

use super::config::{LinkConfig, Speed};
use super::error::Result;
use super::events::{EventSink, LinkEvent, NoEvents};
use super::mac::Lan7801;
use crate::hal::transport::RegisterTransport;
use crate::internal::bcm89881_regs::{blink, devad, reg, setup};
use crate::internal::constants::HYDRALINK_PHY_ADDR;
use crate::phy::bcm89881::{Bcm89881, DiagnosticRegister};

/// Live configuration read back from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkState {
    /// PHY speed selection, `None` when unrecognised
    pub speed: Option<Speed>,
    /// BASE-T1 role
    pub master: bool,
    /// Receive filter accepts all unicast frames
    pub promiscuous: bool,
}

/// Identified LAN7801 + BCM89881 pair
pub struct HydraLink<T: RegisterTransport, D: DelayNs, E: EventSink = NoEvents> {
    mac: Lan7801<T, D>,
    phy: Bcm89881,
    events: E,
}

impl<T: RegisterTransport, D: DelayNs> HydraLink<T, D> {
    /// Identify both chips and take ownership of the MAC
    ///
    /// # Errors
    ///
    /// [`DeviceError::WrongMac`](super::error::DeviceError::WrongMac) or
    /// [`DeviceError::WrongPhy`](super::error::DeviceError::WrongPhy) when
    /// an identifier does not match; I/O errors from the transport.
    pub fn new(mac: Lan7801<T, D>) -> Result<Self> {
        Self::with_events(mac, NoEvents)
    }
}

impl<T: RegisterTransport, D: DelayNs, E: EventSink> HydraLink<T, D, E> {
    /// Identify both chips, reporting progress to `events`
    pub fn with_events(mut mac: Lan7801<T, D>, mut events: E) -> Result<Self> {
        let phy = Bcm89881::new(HYDRALINK_PHY_ADDR)?;
        let mac_id = mac.verify_id()?;
        let phy_id = phy.verify_id(&mut mac)?;
        events.on_event(&LinkEvent::Identified { mac_id, phy_id });

        Ok(Self { mac, phy, events })
    }

    /// MAC register file
    pub fn mac(&mut self) -> &mut Lan7801<T, D> {
        &mut self.mac
    }

    /// PHY driver; pass [`mac`](Self::mac) as its bus
    pub const fn phy(&self) -> Bcm89881 {
        self.phy
    }

    /// Event sink
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// Release the MAC register file and the event sink
    pub fn into_inner(self) -> (Lan7801<T, D>, E) {
        (self.mac, self.events)
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Apply `config`
    ///
    /// On failure after the reset was asserted, the reset is released
    /// before the original error is returned. A failing release is
    /// reported as [`LinkEvent::ReleaseFailed`].
    pub fn setup(&mut self, config: &LinkConfig) -> Result<()> {
        self.phy.reset(&mut self.mac, true)?;
        self.events.on_event(&LinkEvent::ResetAsserted);

        if let Err(err) = self.configure(config) {
            #[cfg(feature = "defmt")]
            defmt::warn!("hydralink: setup failed: {}", err);
            if let Err(release) = self.phy.reset(&mut self.mac, false) {
                self.events.on_event(&LinkEvent::ReleaseFailed(release));
            }
            return Err(err);
        }

        self.phy.reset(&mut self.mac, false)?;
        self.events.on_event(&LinkEvent::ResetReleased);
        Ok(())
    }

    /// Phases run while the PHY is held in reset
    fn configure(&mut self, config: &LinkConfig) -> Result<()> {
        self.configure_platform()?;
        self.events.on_event(&LinkEvent::PlatformConfigured);

        if let Some(enabled) = config.promiscuous {
            self.mac.set_promiscuous(enabled)?;
            self.events.on_event(&LinkEvent::PromiscuousSet(enabled));
        }

        if let Some(address) = config.mac_address {
            self.mac.set_mac_address(address)?;
            self.events.on_event(&LinkEvent::MacAddressSet(address));
        }

        if let Some(speed) = config.speed {
            self.apply_speed(speed)?;
        }

        if let Some(master) = config.master {
            self.phy.set_master(&mut self.mac, master)?;
            self.events.on_event(&LinkEvent::RoleSet { master });
        }

        Ok(())
    }

    /// Clock source, RGMII mode and LED defaults
    fn configure_platform(&mut self) -> Result<()> {
        self.mac.enable_clock_125()?;

        let phy = self.phy;
        let mdio = &mut self.mac;
        phy.set(mdio, devad::PMA_PMD, reg::RGMII_CTRL, setup::RGMII_CTRL)?;
        phy.set(mdio, devad::PMA_PMD, reg::RGMII_SGMII_SEL, setup::RGMII_SGMII_SEL)?;
        phy.set(mdio, devad::PMA_PMD, reg::LED_INTR_CTRL, setup::LED_INTR_CTRL)?;
        self.restore_leds()
    }

    fn restore_leds(&mut self) -> Result<()> {
        let phy = self.phy;
        phy.set(&mut self.mac, devad::PMA_PMD, reg::LED_OVERRIDE_A, setup::LED_OVERRIDE_A)?;
        phy.set(&mut self.mac, devad::PMA_PMD, reg::LED_OVERRIDE_B, setup::LED_OVERRIDE_B)
    }

    /// Program MAC and PHY speed with the datapath stopped
    ///
    /// If stopping or programming fails, the datapath is restarted before
    /// the error is returned. A failing restart is reported as
    /// [`LinkEvent::RestartFailed`].
    fn apply_speed(&mut self, speed: Speed) -> Result<()> {
        if let Err(err) = self.stop_and_program(speed) {
            if let Err(restart) = self.mac.start_datapath() {
                self.events.on_event(&LinkEvent::RestartFailed(restart));
            }
            return Err(err);
        }

        self.mac.start_datapath()?;
        self.events.on_event(&LinkEvent::DatapathResumed);
        Ok(())
    }

    fn stop_and_program(&mut self, speed: Speed) -> Result<()> {
        self.mac.stop_datapath()?;
        self.events.on_event(&LinkEvent::DatapathStopped);

        self.mac.set_auto_speed(false)?;
        self.mac.set_speed_code(speed.mac_code())?;
        self.phy.set_speed(&mut self.mac, speed)?;
        self.events.on_event(&LinkEvent::SpeedSet(speed));
        Ok(())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Read back speed, role and receive filter mode
    pub fn status(&mut self) -> Result<LinkState> {
        Ok(LinkState {
            speed: self.phy.get_speed(&mut self.mac)?,
            master: self.phy.get_master(&mut self.mac)?,
            promiscuous: self.mac.is_promiscuous()?,
        })
    }

    /// Dump the PHY diagnostic registers
    pub fn read_diagnostics<F>(&mut self, visit: F) -> Result<()>
    where
        F: FnMut(&DiagnosticRegister, u16),
    {
        self.phy.read_diagnostics(&mut self.mac, visit)
    }

    /// Flash the PHY LEDs and the activity GPIO `count` times, holding each
    /// half of a cycle for `hold_ms`.
    ///
    /// The LED defaults are restored and the GPIO driven low afterwards,
    /// also when a cycle fails; the first error is returned.
    pub fn blink(&mut self, count: u32, hold_ms: u32) -> Result<()> {
        let blinked = self.blink_cycles(count, hold_ms);
        let restored = self
            .restore_leds()
            .and_then(|()| self.mac.set_activity_gpio(false));
        blinked.and(restored)
    }

    fn blink_cycles(&mut self, count: u32, hold_ms: u32) -> Result<()> {
        self.mac.set_activity_gpio(false)?;

        for _ in 0..count {
            self.set_led_overrides(blink::ON_B, blink::ON_A1, blink::ON_A2)?;
            self.mac.set_activity_gpio(true)?;
            self.mac.delay_mut().delay_ms(hold_ms);

            self.set_led_overrides(blink::OFF_B, blink::OFF_A1, blink::OFF_A2)?;
            self.mac.set_activity_gpio(false)?;
            self.mac.delay_mut().delay_ms(hold_ms);
        }
        Ok(())
    }

    fn set_led_overrides(&mut self, b: u16, a1: u16, a2: u16) -> Result<()> {
        let phy = self.phy;
        let mdio = &mut self.mac;
        phy.set(mdio, devad::PMA_PMD, reg::LED_OVERRIDE_B, b)?;
        phy.set(mdio, devad::PMA_PMD, reg::LED_OVERRIDE_A, a1)?;
        phy.set(mdio, devad::PMA_PMD, reg::LED_OVERRIDE_A, a2)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
