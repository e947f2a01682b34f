//! Testing utilities and mock implementations
//!
//! Host-side stand-ins for everything the driver talks to:
//!
//! - [`SimulatedAdapter`]: register-level model of a HydraLink (LAN7801 CSRs
//!   with the BCM89881 behind the MII controller)
//! - [`MockMdioBus`]: Clause-22/Clause-45 register store for PHY tests
//! - [`MockDelay`]: records requested delays instead of sleeping
//! - [`MockControlPipe`]: USB control pipe recording vendor requests
//! - [`MockDriverChannel`]: privileged-driver channel with scripted replies
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::vec;
use std::vec::Vec;

use crate::driver::error::{IoError, IoResult, Result};
use crate::hal::ioctl::DriverChannel;
use crate::hal::mdio::{MdioBus, MmdBus, check_c22, check_c45, phy_reg};
use crate::hal::transport::{RegisterAddress, RegisterTransport};
use crate::hal::usb::ControlPipe;
use crate::internal::constants::{IOCTL_HEADER_LEN, IOCTL_STATUS_OFFSET, REGISTER_WIDTH};
use crate::internal::lan7801_regs::{e2p_cmd, mac_cr, mac_path, mii_acc, reg};

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: RefCell<u64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Clause-22 and Clause-45 registers live in separate maps; Clause-45
/// accesses go straight to their map instead of through registers 13/14.
#[derive(Debug, Default)]
pub struct MockMdioBus {
    registers: RefCell<HashMap<(u8, u8), u16>>,
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    mmd: RefCell<HashMap<(u8, u8, u16), u16>>,
    mmd_reads: RefCell<Vec<(u8, u8, u16)>>,
    mmd_writes: RefCell<Vec<(u8, u8, u16, u16)>>,
}

impl MockMdioBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a Clause-22 register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Clause-22 writes, in order
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
        self.mmd_writes.borrow_mut().clear();
        self.mmd_reads.borrow_mut().clear();
    }

    /// Set a Clause-45 register value
    pub fn set_c45(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.mmd.borrow_mut().insert((phy_addr, devad, reg), value);
    }

    pub fn get_c45(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.mmd.borrow().get(&(phy_addr, devad, reg)).copied()
    }

    /// Clause-45 reads: (phy, devad, reg)
    pub fn c45_reads(&self) -> Vec<(u8, u8, u16)> {
        self.mmd_reads.borrow().clone()
    }

    /// Clause-45 writes: (phy, devad, reg, value)
    pub fn c45_writes(&self) -> Vec<(u8, u8, u16, u16)> {
        self.mmd_writes.borrow().clone()
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        check_c22(phy_addr, reg_addr)?;
        Ok(self.get_register(phy_addr, reg_addr).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        check_c22(phy_addr, reg_addr)?;
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));
        self.set_register(phy_addr, reg_addr, value);
        Ok(())
    }
}

impl MmdBus for MockMdioBus {
    fn read_c45(&mut self, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        check_c45(phy_addr, devad)?;
        self.mmd_reads.borrow_mut().push((phy_addr, devad, reg));
        Ok(self.get_c45(phy_addr, devad, reg).unwrap_or(0))
    }

    fn write_c45(&mut self, phy_addr: u8, devad: u8, reg: u16, value: u16) -> Result<()> {
        check_c45(phy_addr, devad)?;
        self.mmd_writes
            .borrow_mut()
            .push((phy_addr, devad, reg, value));
        self.set_c45(phy_addr, devad, reg, value);
        Ok(())
    }
}

// =============================================================================
// Simulated Adapter
// =============================================================================

/// One CSR access as seen by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Address and value returned
    Read(u16, u32),
    /// Address and value written
    Write(u16, u32),
}

/// State of one of the TX/RX paths
#[derive(Debug, Clone, Copy)]
struct PathState {
    /// Bits other than ENABLE, as last written
    latched: u32,
    enabled: bool,
    /// Target enable state and reads left until it takes effect
    pending: Option<(bool, u32)>,
}

impl PathState {
    const fn running() -> Self {
        Self {
            latched: 0,
            enabled: true,
            pending: None,
        }
    }

    fn value(&self) -> u32 {
        self.latched | if self.enabled { mac_path::ENABLE } else { 0 }
    }

    fn write(&mut self, value: u32, latency: u32) {
        self.latched = value & !mac_path::ENABLE;
        let target = value & mac_path::ENABLE != 0;
        if target == self.enabled || latency == 0 {
            self.enabled = target;
            self.pending = None;
        } else {
            self.pending = Some((target, latency));
        }
    }

    fn read(&mut self) -> u32 {
        let value = self.value();
        if let Some((target, left)) = self.pending {
            if left <= 1 {
                self.enabled = target;
                self.pending = None;
            } else {
                self.pending = Some((target, left - 1));
            }
        }
        value
    }
}

/// Register-level model of a HydraLink adapter
///
/// Models the parts of the LAN7801 the driver depends on:
///
/// - plain CSRs backed by a map (unset registers read 0)
/// - the MII controller: an access executes against the PHY model when
///   `MII_ACC` is written, then reports busy for `mii_latency` reads
/// - the BCM89881 Clause-22 window, with registers 13/14 implementing the
///   MMD address/data functions over a Clause-45 store
/// - the EEPROM controller with a 512-byte array honouring EWEN/EWDS
/// - `MAC_RX`/`MAC_TX` whose enable bit follows a write after
///   `path_latency` reads
///
/// Every successful access is logged. Faults can be injected per address.
#[derive(Debug)]
pub struct SimulatedAdapter {
    csrs: HashMap<u16, u32>,
    log: Vec<Access>,

    mii_busy: u32,
    mii_latency: u32,
    phy_c22: HashMap<(u8, u8), u16>,
    mmd_ctrl: HashMap<u8, u16>,
    mmd_addr: HashMap<(u8, u8), u16>,
    phy_c45: HashMap<(u8, u8, u16), u16>,
    c45_writes: Vec<(u8, u8, u16, u16)>,

    eeprom: [u8; 512],
    eeprom_write_enabled: bool,
    eeprom_busy: u32,
    eeprom_latency: u32,

    rx: PathState,
    tx: PathState,
    path_latency: u32,

    faults: HashMap<u16, IoError>,
    write_fault: Option<(u16, u32, IoError)>,
}

impl Default for SimulatedAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAdapter {
    /// Blank adapter: every register reads 0, paths running
    pub fn new() -> Self {
        Self {
            csrs: HashMap::new(),
            log: Vec::new(),
            mii_busy: 0,
            mii_latency: 0,
            phy_c22: HashMap::new(),
            mmd_ctrl: HashMap::new(),
            mmd_addr: HashMap::new(),
            phy_c45: HashMap::new(),
            c45_writes: Vec::new(),
            eeprom: [0xFF; 512],
            eeprom_write_enabled: false,
            eeprom_busy: 0,
            eeprom_latency: 0,
            rx: PathState::running(),
            tx: PathState::running(),
            path_latency: 0,
            faults: HashMap::new(),
            write_fault: None,
        }
    }

    /// A LAN7801 rev 2 with a BCM89881 at PHY address 0, in its power-on
    /// state: ASD enabled, 1000 Mb/s MAC code, PHY selecting 100 Mb/s.
    pub fn hydralink() -> Self {
        let mut sim = Self::new();
        sim.set_csr(reg::ID_REV, 0x7801_0002);
        sim.set_csr(reg::MAC_CR, mac_cr::ASD | u32::from(mac_cr::SPEED_1000) << mac_cr::SPEED_SHIFT);
        sim.set_phy_c45(0, 1, 0x0002, 0xAE02);
        sim.set_phy_c45(0, 1, 0x0003, 0xB000);
        sim.set_phy_c45(0, 1, 0x0000, 0x2000);
        sim
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Set a plain CSR without logging
    pub fn set_csr(&mut self, addr: u16, value: u32) {
        self.csrs.insert(addr, value);
    }

    /// Current CSR value without side effects
    pub fn csr(&self, addr: u16) -> u32 {
        match addr {
            reg::MAC_RX => self.rx.value(),
            reg::MAC_TX => self.tx.value(),
            reg::MII_ACC => if self.mii_busy > 0 { mii_acc::BUSY } else { 0 },
            reg::E2P_CMD => {
                let idle = self.csrs.get(&addr).copied().unwrap_or(0);
                if self.eeprom_busy > 0 { idle | e2p_cmd::BUSY } else { idle }
            }
            _ => self.csrs.get(&addr).copied().unwrap_or(0),
        }
    }

    pub fn set_mii_latency(&mut self, reads: u32) {
        self.mii_latency = reads;
    }

    pub fn set_eeprom_latency(&mut self, reads: u32) {
        self.eeprom_latency = reads;
    }

    pub fn set_path_latency(&mut self, reads: u32) {
        self.path_latency = reads;
    }

    /// Fail every access to `addr`
    pub fn fail_on(&mut self, addr: u16, err: IoError) {
        self.faults.insert(addr, err);
    }

    /// Let `ok_writes` writes to `addr` succeed, fail every later one
    pub fn fail_after_writes(&mut self, addr: u16, ok_writes: u32, err: IoError) {
        self.write_fault = Some((addr, ok_writes, err));
    }

    // -------------------------------------------------------------------------
    // PHY model
    // -------------------------------------------------------------------------

    pub fn set_phy_c22(&mut self, phy: u8, reg: u8, value: u16) {
        self.phy_c22.insert((phy, reg), value);
    }

    pub fn set_phy_c45(&mut self, phy: u8, devad: u8, reg: u16, value: u16) {
        self.phy_c45.insert((phy, devad, reg), value);
    }

    pub fn phy_c45(&self, phy: u8, devad: u8, reg: u16) -> u16 {
        self.phy_c45.get(&(phy, devad, reg)).copied().unwrap_or(0)
    }

    /// Values written to one Clause-45 register since the last log clear
    pub fn phy_c45_writes(&self, phy: u8, devad: u8, reg: u16) -> Vec<u16> {
        self.c45_writes
            .iter()
            .filter(|w| (w.0, w.1, w.2) == (phy, devad, reg))
            .map(|w| w.3)
            .collect()
    }

    /// (devad, reg) of every Clause-45 write since the last log clear
    pub fn phy_c45_write_order(&self) -> Vec<(u8, u16)> {
        self.c45_writes.iter().map(|w| (w.1, w.2)).collect()
    }

    fn phy_read(&self, phy: u8, reg: u8) -> u16 {
        let ctrl = self.mmd_ctrl.get(&phy).copied().unwrap_or(0);
        let devad = (ctrl & 0x1F) as u8;
        match reg {
            phy_reg::MMD_CTRL => ctrl,
            phy_reg::MMD_DATA => {
                let addr = self.mmd_addr.get(&(phy, devad)).copied().unwrap_or(0);
                if ctrl & 0xC000 == 0 {
                    addr
                } else {
                    self.phy_c45(phy, devad, addr)
                }
            }
            _ => self.phy_c22.get(&(phy, reg)).copied().unwrap_or(0),
        }
    }

    fn phy_write(&mut self, phy: u8, reg: u8, value: u16) {
        let ctrl = self.mmd_ctrl.get(&phy).copied().unwrap_or(0);
        let devad = (ctrl & 0x1F) as u8;
        match reg {
            phy_reg::MMD_CTRL => {
                self.mmd_ctrl.insert(phy, value);
            }
            phy_reg::MMD_DATA if ctrl & 0xC000 == 0 => {
                self.mmd_addr.insert((phy, devad), value);
            }
            phy_reg::MMD_DATA => {
                let addr = self.mmd_addr.get(&(phy, devad)).copied().unwrap_or(0);
                self.c45_writes.push((phy, devad, addr, value));
                self.set_phy_c45(phy, devad, addr, value);
            }
            _ => self.set_phy_c22(phy, reg, value),
        }
    }

    // -------------------------------------------------------------------------
    // EEPROM model
    // -------------------------------------------------------------------------

    pub fn eeprom(&self) -> &[u8; 512] {
        &self.eeprom
    }

    pub fn eeprom_mut(&mut self) -> &mut [u8; 512] {
        &mut self.eeprom
    }

    fn eeprom_execute(&mut self, command: u32) {
        let addr = (command & e2p_cmd::ADDR_MASK) as usize;
        match (command >> e2p_cmd::CMD_SHIFT) & e2p_cmd::CMD_MASK {
            0b000 => {
                let byte = u32::from(self.eeprom[addr]);
                self.set_csr(reg::E2P_DATA, byte);
            }
            0b001 => self.eeprom_write_enabled = false,
            0b010 => self.eeprom_write_enabled = true,
            0b011 if self.eeprom_write_enabled => {
                self.eeprom[addr] = self.csr(reg::E2P_DATA) as u8;
            }
            0b110 if self.eeprom_write_enabled => self.eeprom = [0xFF; 512],
            _ => {}
        }
        self.set_csr(reg::E2P_CMD, command & !e2p_cmd::BUSY);
        self.eeprom_busy = self.eeprom_latency;
    }

    // -------------------------------------------------------------------------
    // Access log
    // -------------------------------------------------------------------------

    pub fn log(&self) -> Vec<Access> {
        self.log.clone()
    }

    /// Logged writes as (address, value)
    pub fn writes(&self) -> Vec<(u16, u32)> {
        self.log
            .iter()
            .filter_map(|a| match *a {
                Access::Write(addr, value) => Some((addr, value)),
                Access::Read(..) => None,
            })
            .collect()
    }

    /// Forget logged CSR accesses and Clause-45 writes
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.c45_writes.clear();
    }

    fn check_fault(&mut self, addr: u16, is_write: bool) -> IoResult<()> {
        if let Some(err) = self.faults.get(&addr) {
            return Err(*err);
        }
        if is_write {
            if let Some((fault_addr, left, err)) = &mut self.write_fault {
                if *fault_addr == addr {
                    if *left == 0 {
                        return Err(*err);
                    }
                    *left -= 1;
                }
            }
        }
        Ok(())
    }
}

fn countdown(busy: &mut u32) -> bool {
    if *busy == 0 {
        return false;
    }
    *busy -= 1;
    true
}

impl RegisterTransport for SimulatedAdapter {
    fn read_reg(&mut self, addr: RegisterAddress) -> IoResult<u32> {
        let addr = addr.value();
        self.check_fault(addr, false)?;

        let value = match addr {
            reg::MAC_RX => self.rx.read(),
            reg::MAC_TX => self.tx.read(),
            reg::MII_ACC => {
                if countdown(&mut self.mii_busy) {
                    mii_acc::BUSY
                } else {
                    0
                }
            }
            reg::E2P_CMD => {
                let idle = self.csr(addr) & !e2p_cmd::BUSY;
                if countdown(&mut self.eeprom_busy) {
                    idle | e2p_cmd::BUSY
                } else {
                    idle
                }
            }
            _ => self.csr(addr),
        };

        self.log.push(Access::Read(addr, value));
        Ok(value)
    }

    fn write_reg(&mut self, addr: RegisterAddress, value: u32) -> IoResult<()> {
        let addr = addr.value();
        self.check_fault(addr, true)?;
        self.log.push(Access::Write(addr, value));

        match addr {
            reg::MAC_RX => self.rx.write(value, self.path_latency),
            reg::MAC_TX => self.tx.write(value, self.path_latency),
            reg::MII_ACC if value & mii_acc::BUSY != 0 => {
                let phy = ((value >> mii_acc::PHY_ADDR_SHIFT) & 0x1F) as u8;
                let index = ((value >> mii_acc::REG_ADDR_SHIFT) & 0x1F) as u8;
                if value & mii_acc::WRITE != 0 {
                    let data = self.csr(reg::MII_DATA) as u16;
                    self.phy_write(phy, index, data);
                } else {
                    let data = self.phy_read(phy, index);
                    self.set_csr(reg::MII_DATA, u32::from(data));
                }
                self.mii_busy = self.mii_latency;
            }
            reg::E2P_CMD if value & e2p_cmd::BUSY != 0 => self.eeprom_execute(value),
            _ => self.set_csr(addr, value),
        }
        Ok(())
    }
}

// =============================================================================
// Mock USB Control Pipe
// =============================================================================

/// One recorded vendor request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRequest {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
    /// OUT payload (first four bytes); zero for IN requests
    pub data: [u8; REGISTER_WIDTH],
}

/// Control pipe recording every request
///
/// IN transfers return queued data, or zeros filling the buffer when
/// nothing is queued. OUT transfers report the full length unless
/// overridden with [`set_out_len`](Self::set_out_len).
#[derive(Debug, Default)]
pub struct MockControlPipe {
    requests: Vec<ControlRequest>,
    in_data: VecDeque<Vec<u8>>,
    out_len: Option<usize>,
    failure: Option<IoError>,
}

impl MockControlPipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ControlRequest> {
        self.requests.clone()
    }

    pub fn queue_in_data(&mut self, data: &[u8]) {
        self.in_data.push_back(data.to_vec());
    }

    pub fn set_out_len(&mut self, len: usize) {
        self.out_len = Some(len);
    }

    pub fn fail_with(&mut self, err: IoError) {
        self.failure = Some(err);
    }

    fn record(&mut self, request_type: u8, request: u8, value: u16, index: u16, data: &[u8]) {
        let mut payload = [0u8; REGISTER_WIDTH];
        let len = data.len().min(REGISTER_WIDTH);
        payload[..len].copy_from_slice(&data[..len]);
        self.requests.push(ControlRequest {
            request_type,
            request,
            value,
            index,
            data: payload,
        });
    }
}

impl ControlPipe for MockControlPipe {
    fn control_out(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> IoResult<usize> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        self.record(request_type, request, value, index, data);
        Ok(self.out_len.unwrap_or(data.len()))
    }

    fn control_in(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> IoResult<usize> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        self.record(request_type, request, value, index, &[]);
        match self.in_data.pop_front() {
            Some(data) => {
                let len = data.len().min(buf.len());
                buf[..len].copy_from_slice(&data[..len]);
                Ok(len)
            }
            None => {
                buf.fill(0);
                Ok(buf.len())
            }
        }
    }
}

// =============================================================================
// Mock Driver Channel
// =============================================================================

/// One recorded driver request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRequest {
    pub control_code: u32,
    /// Request bytes as sent
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
enum Reply {
    /// Status word and payload following the header
    Response(u32, Vec<u8>),
    /// Byte count only, buffer untouched
    RawLen(usize),
}

/// Driver channel replaying scripted responses
///
/// When the script runs out, replies with the default status and no
/// payload.
#[derive(Debug, Default)]
pub struct MockDriverChannel {
    requests: Vec<DriverRequest>,
    replies: VecDeque<Reply>,
    default_status: u32,
    failure: Option<IoError>,
}

impl MockDriverChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_response(&mut self, status: u32, payload: &[u8]) {
        self.replies
            .push_back(Reply::Response(status, payload.to_vec()));
    }

    pub fn queue_raw_len(&mut self, len: usize) {
        self.replies.push_back(Reply::RawLen(len));
    }

    pub fn set_default_status(&mut self, status: u32) {
        self.default_status = status;
    }

    pub fn fail_with(&mut self, err: IoError) {
        self.failure = Some(err);
    }

    pub fn requests(&self) -> Vec<DriverRequest> {
        self.requests.clone()
    }
}

impl DriverChannel for MockDriverChannel {
    fn device_io_control(
        &mut self,
        control_code: u32,
        buffer: &mut [u8],
        request_len: usize,
    ) -> IoResult<usize> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        self.requests.push(DriverRequest {
            control_code,
            data: buffer[..request_len].to_vec(),
        });

        let reply = self
            .replies
            .pop_front()
            .unwrap_or(Reply::Response(self.default_status, vec![]));
        match reply {
            Reply::Response(status, payload) => {
                buffer[..IOCTL_HEADER_LEN].fill(0);
                buffer[IOCTL_STATUS_OFFSET..IOCTL_STATUS_OFFSET + 4]
                    .copy_from_slice(&status.to_le_bytes());
                buffer[IOCTL_HEADER_LEN..IOCTL_HEADER_LEN + payload.len()]
                    .copy_from_slice(&payload);
                Ok(IOCTL_HEADER_LEN + payload.len())
            }
            Reply::RawLen(len) => Ok(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;

    fn addr(raw: u16) -> RegisterAddress {
        RegisterAddress::new(raw).unwrap()
    }

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        assert_eq!(mdio.read(0, 1).unwrap(), 0);
        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);
        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(1000);
        delay.delay_us(2);
        assert_eq!(delay.total_ns(), 3000);

        delay.delay_ms(1);
        assert_eq!(delay.total_ms(), 1);
    }

    #[test]
    fn simulated_mmd_window() {
        let mut sim = SimulatedAdapter::hydralink();
        sim.phy_write(0, 13, 0x0001);
        sim.phy_write(0, 14, 0x0002);
        sim.phy_write(0, 13, 0x4001);
        assert_eq!(sim.phy_read(0, 14), 0xAE02);

        sim.phy_write(0, 14, 0x1234);
        assert_eq!(sim.phy_c45(0, 1, 0x0002), 0x1234);
        assert_eq!(sim.phy_c45_writes(0, 1, 0x0002), [0x1234]);
    }

    #[test]
    fn simulated_path_latency() {
        let mut sim = SimulatedAdapter::hydralink();
        sim.set_path_latency(2);

        sim.write_reg(addr(reg::MAC_RX), mac_path::DISABLE).unwrap();
        assert_ne!(sim.read_reg(addr(reg::MAC_RX)).unwrap() & mac_path::ENABLE, 0);
        assert_ne!(sim.read_reg(addr(reg::MAC_RX)).unwrap() & mac_path::ENABLE, 0);
        assert_eq!(sim.read_reg(addr(reg::MAC_RX)).unwrap() & mac_path::ENABLE, 0);
    }

    #[test]
    fn simulated_fault_injection() {
        let mut sim = SimulatedAdapter::hydralink();
        sim.fail_after_writes(reg::RFE_CTL, 1, IoError::Transport(-1));

        assert!(sim.write_reg(addr(reg::RFE_CTL), 1).is_ok());
        assert_eq!(
            sim.write_reg(addr(reg::RFE_CTL), 2),
            Err(IoError::Transport(-1))
        );
        assert_eq!(sim.writes(), [(reg::RFE_CTL, 1)]);
    }
}
