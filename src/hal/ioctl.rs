//! Privileged-Driver Transport
//!
//! On hosts where the LAN7801 is bound to the vendor's network driver, CSRs
//! are reached through that driver's control device (`\\.\LAN7800_IOCTL`)
//! with a single control code. Request and response share one 4 KiB buffer.
//!
//! # Wire format
//!
//! Requests are little-endian `u32` words:
//!
//! | Word | Contents                                                   |
//! |------|------------------------------------------------------------|
//! | 0    | selector: 0x10002 (driver picks adapter), 0x20001 (indexed) |
//! | 1    | opcode: 8 read, 9 write, 0x12 adapter key                  |
//! | 2    | interface index (0 when not indexed)                       |
//! | 3    | CSR address (register opcodes only)                        |
//! | 4    | value (write only)                                         |
//!
//! Responses carry a 16-byte header with a little-endian status word at
//! bytes 8..12, followed by the payload. Status 4 means the adapter is busy
//! and the request is retried until the busy deadline expires; any other
//! non-zero status is fatal.

use embedded_hal::delay::DelayNs;

use super::poll::{PollPolicy, poll_until};
use super::transport::{RegisterAddress, RegisterTransport};
use crate::driver::error::{IoError, IoResult};
use crate::internal::constants::{
    DRIVER_BUSY_TIMEOUT_US, DRIVER_RETRY_INTERVAL_US, IOCTL_BUFFER_SIZE, IOCTL_CONTROL_CODE,
    IOCTL_HEADER_LEN, IOCTL_OP_ADAPTER_KEY, IOCTL_OP_READ_REGISTER, IOCTL_OP_WRITE_REGISTER,
    IOCTL_SELECT_DEFAULT, IOCTL_SELECT_INDEXED, IOCTL_STATUS_BUSY, IOCTL_STATUS_OFFSET,
    IOCTL_STATUS_OK, IOCTL_WRITE_ACK_LEN, REGISTER_WIDTH,
};

/// An open handle on the driver's control device
pub trait DriverChannel {
    /// Issue one control request.
    ///
    /// The first `request_len` bytes of `buffer` hold the request; the
    /// driver writes its response back into `buffer`. Returns the number of
    /// bytes the driver reports as written, which may exceed `buffer.len()`
    /// on a misbehaving driver.
    fn device_io_control(
        &mut self,
        control_code: u32,
        buffer: &mut [u8],
        request_len: usize,
    ) -> IoResult<usize>;
}

/// Default busy-retry budget for driver requests
pub const DEFAULT_BUSY_POLICY: PollPolicy =
    PollPolicy::new(DRIVER_BUSY_TIMEOUT_US, DRIVER_RETRY_INTERVAL_US);

/// CSR transport over the vendor driver's control device
pub struct IoctlTransport<C: DriverChannel, D: DelayNs> {
    channel: C,
    delay: D,
    selector: u32,
    interface: u32,
    busy_policy: PollPolicy,
    buffer: [u8; IOCTL_BUFFER_SIZE],
}

impl<C: DriverChannel, D: DelayNs> IoctlTransport<C, D> {
    /// Let the driver pick the adapter
    pub fn new(channel: C, delay: D) -> Self {
        Self {
            channel,
            delay,
            selector: IOCTL_SELECT_DEFAULT,
            interface: 0,
            busy_policy: DEFAULT_BUSY_POLICY,
            buffer: [0; IOCTL_BUFFER_SIZE],
        }
    }

    /// Address the adapter at `index` explicitly
    pub fn with_interface(channel: C, delay: D, index: u32) -> Self {
        Self {
            selector: IOCTL_SELECT_INDEXED,
            interface: index,
            ..Self::new(channel, delay)
        }
    }

    /// Interface index, if one was given
    pub const fn interface_index(&self) -> Option<u32> {
        if self.selector == IOCTL_SELECT_INDEXED {
            Some(self.interface)
        } else {
            None
        }
    }

    /// Replace the busy-retry budget
    pub fn set_busy_policy(&mut self, policy: PollPolicy) {
        self.busy_policy = policy;
    }

    /// Current busy-retry budget
    pub const fn busy_policy(&self) -> PollPolicy {
        self.busy_policy
    }

    /// Access the underlying channel
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Release the channel and delay
    pub fn into_inner(self) -> (C, D) {
        (self.channel, self.delay)
    }

    /// Fetch the adapter's registry key as UTF-16 code units.
    ///
    /// The terminating NUL is stripped. Returns the key length in code
    /// units; when it exceeds `out.len()` only the leading part is copied.
    pub fn adapter_key(&mut self, out: &mut [u16]) -> IoResult<usize> {
        let payload = self.exchange(IOCTL_OP_ADAPTER_KEY, &[])?;
        if payload.len() % 2 != 0 {
            return Err(IoError::UnexpectedLength {
                expected: payload.len() + 1,
                actual: payload.len(),
            });
        }

        let mut units = payload
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
        let mut len = payload.len() / 2;
        if payload.len() >= 2 && payload[payload.len() - 2..] == [0, 0] {
            len -= 1;
        }

        for (slot, unit) in out.iter_mut().zip(units.by_ref().take(len)) {
            *slot = unit;
        }
        Ok(len)
    }

    /// Whether the adapter's registry key equals `key`
    pub fn adapter_key_matches(&mut self, key: &str) -> IoResult<bool> {
        let payload = self.exchange(IOCTL_OP_ADAPTER_KEY, &[])?;
        let mut units = payload
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .take_while(|&unit| unit != 0);
        let mut expected = key.encode_utf16();

        loop {
            match (units.next(), expected.next()) {
                (None, None) => return Ok(true),
                (Some(a), Some(b)) if a == b => {}
                _ => return Ok(false),
            }
        }
    }

    /// Send one request and return the response payload, retrying while
    /// the driver reports busy.
    fn exchange(&mut self, opcode: u32, operands: &[u32]) -> IoResult<&[u8]> {
        let header = [self.selector, opcode, self.interface];
        let mut response_len = 0usize;

        poll_until(
            &mut self.delay,
            self.busy_policy,
            IoError::DriverBusy,
            || {
                let request_len = encode_words(&mut self.buffer, &header, operands);
                let written =
                    self.channel
                        .device_io_control(IOCTL_CONTROL_CODE, &mut self.buffer, request_len)?;
                if written > IOCTL_BUFFER_SIZE {
                    return Err(IoError::ResponseTooLarge(written));
                }
                if written < IOCTL_HEADER_LEN {
                    return Err(IoError::ResponseTooShort(written));
                }

                match response_status(&self.buffer) {
                    IOCTL_STATUS_OK => {
                        response_len = written;
                        Ok(true)
                    }
                    IOCTL_STATUS_BUSY => {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("ioctl: adapter busy, retrying opcode {}", opcode);
                        Ok(false)
                    }
                    code => Err(IoError::DriverStatus(code)),
                }
            },
        )?;

        Ok(&self.buffer[IOCTL_HEADER_LEN..response_len])
    }
}

fn encode_words(buffer: &mut [u8], header: &[u32], operands: &[u32]) -> usize {
    let mut len = 0;
    for word in header.iter().chain(operands) {
        buffer[len..len + 4].copy_from_slice(&word.to_le_bytes());
        len += 4;
    }
    len
}

fn response_status(buffer: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&buffer[IOCTL_STATUS_OFFSET..IOCTL_STATUS_OFFSET + 4]);
    u32::from_le_bytes(word)
}

impl<C: DriverChannel, D: DelayNs> RegisterTransport for IoctlTransport<C, D> {
    fn read_reg(&mut self, addr: RegisterAddress) -> IoResult<u32> {
        let payload = self.exchange(IOCTL_OP_READ_REGISTER, &[u32::from(addr.value())])?;
        if payload.len() != REGISTER_WIDTH {
            return Err(IoError::UnexpectedLength {
                expected: REGISTER_WIDTH,
                actual: payload.len(),
            });
        }
        Ok(u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]))
    }

    fn write_reg(&mut self, addr: RegisterAddress, value: u32) -> IoResult<()> {
        let payload = self.exchange(IOCTL_OP_WRITE_REGISTER, &[u32::from(addr.value()), value])?;
        if payload.len() != IOCTL_WRITE_ACK_LEN {
            return Err(IoError::UnexpectedLength {
                expected: IOCTL_WRITE_ACK_LEN,
                actual: payload.len(),
            });
        }
        Ok(())
    }
}
