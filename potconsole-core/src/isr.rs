//! Interrupt dispatch
//!
//! One entry point polls both interrupt sources: a received byte and a
//! completed conversion. It runs to completion in bounded time, never
//! blocks and never retries.
//!
//! A received byte is either forwarded or posted as a command, never both.

use potconsole_hal::{Converter, LineError, ParallelPort, UartRx};

use crate::state::DeviceState;

/// What happened to a received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteEvent {
    /// Left in the mailbox for the main loop
    Posted(u8),
    /// Written to the output port; forward mode is now off
    Forwarded(u8),
    /// Discarded because of a line fault
    Dropped(LineError),
}

/// Work done by one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Serviced {
    pub byte: Option<ByteEvent>,
    /// New sample value, if a conversion completed
    pub sample: Option<u8>,
}

impl Serviced {
    /// Check whether the dispatch found nothing pending
    pub fn is_spurious(&self) -> bool {
        self.byte.is_none() && self.sample.is_none()
    }
}

/// Service every pending interrupt source
pub fn service<R, A, P>(state: &DeviceState, rx: &mut R, adc: &mut A, port: &mut P) -> Serviced
where
    R: UartRx,
    A: Converter,
    P: ParallelPort,
{
    let byte = rx
        .take_byte()
        .map(|received| on_byte_received(state, received, port));

    let sample = if adc.is_complete() {
        Some(on_conversion_complete(state, adc))
    } else {
        None
    };

    Serviced { byte, sample }
}

/// Handle one byte from the receiver
pub fn on_byte_received<P: ParallelPort>(
    state: &DeviceState,
    received: Result<u8, LineError>,
    port: &mut P,
) -> ByteEvent {
    let byte = match received {
        Ok(byte) => byte,
        Err(error) => return ByteEvent::Dropped(error),
    };

    if state.is_forwarding() {
        port.write(byte);
        state.disarm_forward();
        state.request_menu();
        ByteEvent::Forwarded(byte)
    } else {
        state.command().post(byte);
        ByteEvent::Posted(byte)
    }
}

/// Store a finished conversion and acknowledge it
pub fn on_conversion_complete<A: Converter>(state: &DeviceState, adc: &mut A) -> u8 {
    let value = adc.result();
    state.set_sample(value);
    adc.acknowledge();
    value
}
