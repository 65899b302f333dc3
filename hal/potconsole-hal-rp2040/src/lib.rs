//! RP2040-specific HAL for the serial menu console
//!
//! This crate provides RP2040 implementations of the shared
//! `potconsole-hal` traits:
//!
//! - UART0 data registers with the FIFOs disabled, so transmit and receive
//!   behave as one-byte holding registers (implements `UartTx`/`UartRx`)
//! - ADC single-shot conversions reported through the result FIFO
//!   (implements `Converter`)
//! - GPIO outputs as port lines (implements `OutputPin`)
//!
//! Peripheral bring-up (clocks, resets, pin muxing, baud divisors) is left
//! to the embassy-rp drivers; the types here only touch the registers the
//! console needs afterwards. They are zero-sized, so the main loop and the
//! interrupt handler each hold their own copy.

#![no_std]

pub mod adc;
pub mod gpio;
pub mod uart;

pub use adc::{AdcFifo, RESOLUTION_BITS};
pub use gpio::PortPin;
pub use uart::Uart0;

// Re-export shared traits from potconsole-hal for convenience
pub use potconsole_hal::{Converter, OutputPin, ParallelPort, UartRx, UartTx};
