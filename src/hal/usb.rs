//! USB Control-Transfer Transport
//!
//! Reaches the LAN7801 CSRs with the chip's vendor requests on the default
//! control pipe:
//!
//! | Operation | bmRequestType | bRequest | wValue | wIndex  | Data            |
//! |-----------|---------------|----------|--------|---------|-----------------|
//! | write     | 0x40          | 0xA0     | 0      | address | 4 bytes, LE u32 |
//! | read      | 0xC0          | 0xA1     | 0      | address | 4 bytes, LE u32 |
//!
//! The USB stack itself is abstracted as a [`ControlPipe`], which maps
//! directly onto host libraries such as `rusb` (`write_control` /
//! `read_control`) and onto embedded USB host stacks.

use super::transport::{RegisterAddress, RegisterTransport};
use crate::driver::error::{IoError, IoResult};
use crate::internal::constants::{
    REGISTER_WIDTH, USB_REQUEST_READ_REGISTER, USB_REQUEST_TYPE_IN, USB_REQUEST_TYPE_OUT,
    USB_REQUEST_WRITE_REGISTER,
};

/// A USB device's default control pipe
///
/// Timeouts are the pipe's responsibility; a transfer that times out should
/// be reported as an error, not as a short transfer.
pub trait ControlPipe {
    /// Host-to-device control transfer; returns the number of bytes sent
    fn control_out(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> IoResult<usize>;

    /// Device-to-host control transfer; returns the number of bytes received
    fn control_in(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> IoResult<usize>;
}

/// CSR transport over vendor control transfers
#[derive(Debug)]
pub struct UsbTransport<P: ControlPipe> {
    pipe: P,
}

impl<P: ControlPipe> UsbTransport<P> {
    /// Wrap an opened control pipe
    pub const fn new(pipe: P) -> Self {
        Self { pipe }
    }

    /// Access the underlying pipe
    pub fn pipe_mut(&mut self) -> &mut P {
        &mut self.pipe
    }

    /// Release the underlying pipe
    pub fn into_inner(self) -> P {
        self.pipe
    }
}

fn expect_register_width(actual: usize) -> IoResult<()> {
    if actual == REGISTER_WIDTH {
        Ok(())
    } else {
        Err(IoError::UnexpectedLength {
            expected: REGISTER_WIDTH,
            actual,
        })
    }
}

impl<P: ControlPipe> RegisterTransport for UsbTransport<P> {
    fn read_reg(&mut self, addr: RegisterAddress) -> IoResult<u32> {
        let mut buf = [0u8; REGISTER_WIDTH];
        let received = self.pipe.control_in(
            USB_REQUEST_TYPE_IN,
            USB_REQUEST_READ_REGISTER,
            0,
            addr.value(),
            &mut buf,
        )?;
        expect_register_width(received)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn write_reg(&mut self, addr: RegisterAddress, value: u32) -> IoResult<()> {
        let sent = self.pipe.control_out(
            USB_REQUEST_TYPE_OUT,
            USB_REQUEST_WRITE_REGISTER,
            0,
            addr.value(),
            &value.to_le_bytes(),
        )?;
        expect_register_width(sent)
    }
}
