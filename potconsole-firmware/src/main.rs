//! potconsole - Serial menu console firmware
//!
//! Main firmware binary for RP2040-based boards. Prints a two-entry menu
//! over UART0 at 9600 8N1:
//!
//! - `1`: report the potentiometer (ADC0) as three ASCII digits
//! - `2`: copy the next received byte onto the GPIO2-9 output port
//!
//! Thread mode runs the console loop; UART receive and ADC completion are
//! handled in interrupt context. The two sides share only
//! [`shared::DEVICE`].

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use potconsole_core::config::StartupConfig;
use potconsole_core::Console;
use potconsole_hal_rp2040::{AdcFifo, Uart0, RESOLUTION_BITS};

use crate::shared::DEVICE;

mod board;
mod irq;
mod shared;

/// Main entry point
#[entry]
fn main() -> ! {
    info!("potconsole firmware starting...");

    let config = StartupConfig::DEFAULT;
    if let Err(e) = config.validate(RESOLUTION_BITS) {
        defmt::panic!("Invalid startup configuration: {:?}", e);
    }

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = board::init(p, &config);

    if let Err(e) = config.check_baud(board.achieved_baud) {
        defmt::panic!("UART baud rate out of tolerance: {:?}", e);
    }
    debug!(
        "Transmit busy-wait bounded by {} us per byte",
        config.transmit_bound_us()
    );

    // Port belongs to interrupt context from here on
    irq::install(board.port);
    irq::enable();
    info!("Interrupts enabled");

    let mut console = Console::new(&DEVICE, Uart0, AdcFifo);
    let mut phase = console.phase();
    info!("Console running");

    loop {
        let tick = console.poll();

        if let Some(handled) = tick.handled {
            debug!("Handled {:?}", handled);
        }

        let next = console.phase();
        if next != phase {
            if next.is_actionable() {
                debug!("Phase {:?} -> {:?}", phase, next);
            } else {
                trace!("Phase {:?} -> {:?}", phase, next);
            }
            phase = next;
        }
    }
}
