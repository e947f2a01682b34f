//! Critical-section protected HydraLink.

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;

use crate::driver::events::{EventSink, NoEvents};
use crate::driver::link::HydraLink;
use crate::hal::transport::RegisterTransport;

/// A [`HydraLink`] shared between contexts.
///
/// Every access runs inside `critical_section::with()`, so a closure passed
/// to [`with`](Self::with) sees the device for the whole transaction. The
/// slot starts empty so the wrapper can live in a `static`.
pub struct SharedHydraLink<T: RegisterTransport, D: DelayNs, E: EventSink = NoEvents> {
    inner: Mutex<RefCell<Option<HydraLink<T, D, E>>>>,
}

impl<T: RegisterTransport, D: DelayNs, E: EventSink> SharedHydraLink<T, D, E> {
    /// An empty slot (const, suitable for static initialization)
    pub const fn empty() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// A slot holding `link`
    pub const fn new(link: HydraLink<T, D, E>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Some(link))),
        }
    }

    /// Put `link` in the slot, returning the previous occupant
    pub fn install(&self, link: HydraLink<T, D, E>) -> Option<HydraLink<T, D, E>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(link))
    }

    /// Empty the slot
    pub fn take(&self) -> Option<HydraLink<T, D, E>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Whether a link is installed
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` with exclusive access; `None` if the slot is empty.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut HydraLink<T, D, E>) -> R,
    {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Like [`with`](Self::with), but also `None` when the link is already
    /// borrowed (re-entrant call from inside `f`).
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut HydraLink<T, D, E>) -> R,
    {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow_mut()
                .ok()
                .and_then(|mut slot| slot.as_mut().map(f))
        })
    }
}

impl<T: RegisterTransport, D: DelayNs, E: EventSink> Default for SharedHydraLink<T, D, E> {
    fn default() -> Self {
        Self::empty()
    }
}
