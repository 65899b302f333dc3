//! potconsole Hardware Abstraction Layer
//!
//! This crate defines the register-level hardware traits the console logic
//! is written against. Chip-specific HALs implement them, so the same
//! interrupt handler and main loop run on the target and under host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (potconsole-firmware)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  potconsole-core (board-agnostic logic) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  potconsole-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ potconsole-   │
//!             │  hal-rp2040   │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::ParallelPort`] - Digital output
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial data registers
//! - [`adc::Converter`] - Single-channel analog conversion

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::Converter;
pub use gpio::{OutputPin, ParallelPort};
pub use uart::{LineError, UartConfig, UartRx, UartTx};
