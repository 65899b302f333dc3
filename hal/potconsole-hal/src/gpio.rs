//! GPIO output abstractions
//!
//! Provides a single-pin output trait and an 8-bit parallel port built
//! from eight of them.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// 8-bit parallel output port
///
/// Bit `n` of a written value drives line `n` of the port.
pub trait ParallelPort {
    /// Drive all eight lines at once
    fn write(&mut self, value: u8);

    /// Read back the value currently driven on the port
    fn latched(&self) -> u8;
}

// Eight independent pins form a port, least significant bit first
impl<P: OutputPin> ParallelPort for [P; 8] {
    fn write(&mut self, value: u8) {
        for (bit, pin) in self.iter_mut().enumerate() {
            pin.set_state(value & (1 << bit) != 0);
        }
    }

    fn latched(&self) -> u8 {
        self.iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_set_high())
            .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }
}
