//! Build-time gated debug messages for embedded firmware.
//!
//! Firmware wants diagnostic messages sprinkled through its input handling and
//! driver code during bring-up, without paying for them (in flash, cycles, or
//! argument evaluation) in release builds. This crate provides two macros:
//!
//! - [`log_msg!`]: always forwards a formatted message to every enabled
//!   logging backend.
//! - [`dbg_msg!`]: identical to [`log_msg!`] when the `debug` feature is
//!   enabled. Without it, the whole invocation is compiled out: no code is
//!   generated and the arguments are never evaluated, so a side-effecting or
//!   expensive argument expression is safe to leave at the call site.
//!
//! The gating happens at this crate's feature resolution, not at the call
//! site, so downstream crates don't need a `debug` feature of their own.
//!
//! ## Backends
//!
//! The transport (RTT, serial console, ...) is owned by whichever backend the
//! firmware links in:
//!
//! - `defmt`: forward to `defmt::info!`.
//! - `log`: forward to `log::info!`. Install a `log::Log` implementation
//!   (e.g. one that writes to a UART) to receive the messages.
//!
//! With no backend feature enabled, both macros compile to nothing.
//!
//! ```
//! use dbgmsg::{dbg_msg, log_msg};
//!
//! fn on_button(id: u8) {
//!     dbg_msg!("button {} pressed", id);
//! }
//!
//! log_msg!("ready");
//! # on_button(3);
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

mod log;

// Backend re-exports so the macro expansions resolve through `$crate` even
// when the calling crate does not depend on the backends itself.
#[cfg(feature = "defmt")]
#[doc(hidden)]
pub use ::defmt as _defmt;

#[cfg(feature = "log")]
#[doc(hidden)]
pub use ::log as _log;
