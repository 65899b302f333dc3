//! Board-agnostic core logic for the serial menu console
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared device state between the interrupt handler and the main loop
//! - Three-digit ASCII formatting of 8-bit readings
//! - Blocking serial transmitter
//! - Interrupt dispatch (received byte, conversion complete)
//! - Main control loop and its phase model
//! - Command protocol and menu text
//! - Fixed startup configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod control;
pub mod format;
pub mod isr;
pub mod protocol;
pub mod state;

#[cfg(test)]
mod mock;

pub use console::Transmitter;
pub use control::{Console, Handled, Tick};
pub use format::Digits;
pub use protocol::{Command, MENU};
pub use state::{DeviceState, Phase};
