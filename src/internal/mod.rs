//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Identifiers, protocol values and wait budgets
//! - [`lan7801_regs`]: LAN7801 CSR definitions
//! - [`bcm89881_regs`]: BCM89881 Clause-45 register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code.

pub(crate) mod bcm89881_regs;
pub(crate) mod constants;
pub(crate) mod lan7801_regs;
