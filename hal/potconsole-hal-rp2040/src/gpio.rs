//! GPIO port lines
//!
//! Wraps an embassy-rp output so eight of them form a
//! `potconsole_hal::ParallelPort`.

use embassy_rp::gpio::{Level, Output};
use potconsole_hal::OutputPin;

/// First GPIO of the 8-bit output port (bit 0)
pub const PORT_BASE_GPIO: u8 = 2;

/// One output line of the parallel port
pub struct PortPin {
    output: Output<'static>,
}

impl PortPin {
    pub fn new(output: Output<'static>) -> Self {
        Self { output }
    }
}

impl OutputPin for PortPin {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn set_state(&mut self, high: bool) {
        self.output.set_level(Level::from(high));
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
