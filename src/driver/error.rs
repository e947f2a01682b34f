//! Error types for the HydraLink driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Rejected input, raised before any device access
//! - [`DeviceError`]: The attached hardware is not a HydraLink
//! - [`IoError`]: Transport, driver and bounded-wait failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Input validation errors
///
/// These are raised before any register is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// CSR address outside the 12-bit space
    InvalidRegisterAddress,
    /// PHY address outside 0-31
    InvalidPhyAddress,
    /// Clause-22 register index outside 0-31
    InvalidRegisterIndex,
    /// MMD device address outside 0-31
    InvalidDeviceAddress,
    /// EEPROM byte address outside 0-511
    InvalidEepromAddress,
    /// MAC speed code wider than 2 bits
    InvalidSpeedCode,
    /// Link speed other than 100 or 1000 Mb/s
    UnsupportedSpeed,
    /// Edit masks set and clear the same bit
    ConflictingMasks,
    /// MAC address is not six colon-separated hex octets
    MalformedMacAddress,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidRegisterAddress => "register address must be 12-bit",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegisterIndex => "invalid MDIO register index",
            ConfigError::InvalidDeviceAddress => "invalid MMD device address",
            ConfigError::InvalidEepromAddress => "EEPROM address must be 9-bit",
            ConfigError::InvalidSpeedCode => "MAC speed code must be 2-bit",
            ConfigError::UnsupportedSpeed => "speed must be 100 or 1000",
            ConfigError::ConflictingMasks => "set and clear masks are conflicting",
            ConfigError::MalformedMacAddress => "malformed MAC address",
        }
    }
}

// =============================================================================
// Identification Errors
// =============================================================================

/// Hardware identification errors
///
/// Raised at construction when the chips do not report the expected
/// identifiers. The value that was read is carried for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// `ID_REV` does not carry the LAN7801 chip ID
    WrongMac(u32),
    /// PMA/PMD identifier is not the BCM89881
    WrongPhy(u16),
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceError::WrongMac(id) => write!(f, "{}: 0x{id:x}", self.as_str()),
            DeviceError::WrongPhy(id) => write!(f, "{}: 0x{id:x}", self.as_str()),
        }
    }
}

impl DeviceError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceError::WrongMac(_) => "wrong MAC identifier",
            DeviceError::WrongPhy(_) => "wrong PHY identifier",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Transport and hardware-wait errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// A hardware busy flag did not change within its bounded wait
    Timeout,
    /// The privileged driver kept reporting busy past its deadline
    DriverBusy,
    /// The privileged driver returned a fatal status code
    DriverStatus(u32),
    /// A transfer moved a different number of bytes than required
    UnexpectedLength {
        /// Bytes required by the protocol
        expected: usize,
        /// Bytes actually transferred
        actual: usize,
    },
    /// Driver response shorter than its header
    ResponseTooShort(usize),
    /// Driver response larger than the shared buffer
    ResponseTooLarge(usize),
    /// Host-level USB or OS error code
    Transport(i32),
    /// No matching device or driver endpoint
    NotFound,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IoError::DriverStatus(code) => write!(f, "{} {code}", self.as_str()),
            IoError::UnexpectedLength { expected, actual } => {
                write!(f, "{} ({actual} != {expected})", self.as_str())
            }
            IoError::ResponseTooShort(len) | IoError::ResponseTooLarge(len) => {
                write!(f, "{} ({len} bytes)", self.as_str())
            }
            IoError::Transport(code) => write!(f, "{} {code}", self.as_str()),
            IoError::Timeout | IoError::DriverBusy | IoError::NotFound => {
                f.write_str(self.as_str())
            }
        }
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
            IoError::DriverBusy => "adapter is busy, retry later or reconnect the device",
            IoError::DriverStatus(_) => "driver request failed with status",
            IoError::UnexpectedLength { .. } => "unexpected transfer length",
            IoError::ResponseTooShort(_) => "driver response too small",
            IoError::ResponseTooLarge(_) => "driver response too large",
            IoError::Transport(_) => "transport failed with error",
            IoError::NotFound => "device not found",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedSpeed)) => { /* ... */ }
///     Err(Error::Device(DeviceError::WrongPhy(id))) => { /* ... */ }
///     Err(Error::Io(IoError::Timeout)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Input validation error
    Config(ConfigError),
    /// Identification error
    Device(DeviceError),
    /// I/O error
    Io(IoError),
}

impl Error {
    /// Rejected input; nothing was written to the device
    pub const fn is_validation(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Wrong hardware attached
    pub const fn is_identification(&self) -> bool {
        matches!(self, Error::Device(_))
    }

    /// Transport, driver or timeout failure
    pub const fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {e}"),
            Error::Device(e) => write!(f, "device: {e}"),
            Error::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl core::error::Error for ConfigError {}
impl core::error::Error for DeviceError {}
impl core::error::Error for IoError {}
impl core::error::Error for Error {}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Error::Device(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for validation
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for transport operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
