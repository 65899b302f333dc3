//! Board bring-up
//!
//! Pin assignments (RP2040):
//! - UART0: TX=GPIO0, RX=GPIO1
//! - Potentiometer: ADC0 on GPIO26
//! - Output port: GPIO2 (bit 0) .. GPIO9 (bit 7)

use defmt::*;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{AnyPin, Level, Output, Pull};
use embassy_rp::uart::{self, Uart};
use embassy_rp::{Peri, Peripherals};
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;

use potconsole_core::config::{DataBits, Parity, StartupConfig, StopBits, UartConfig};
use potconsole_hal_rp2040::{AdcFifo, PortPin, Uart0};

use crate::shared::OutputPort;

/// Hardware handed to the application after bring-up
pub struct Board {
    /// Output port lines at their reset level
    pub port: OutputPort,
    /// Baud rate the UART divisors actually produce
    pub achieved_baud: u32,
}

/// Configure every peripheral the console uses
///
/// The embassy-rp drivers take the peripherals out of reset and program
/// them; they are leaked afterwards since the firmware never shuts down and
/// only register-level access is needed from here on.
pub fn init(p: Peripherals, config: &StartupConfig) -> Board {
    // Output port, fully output, at its reset value
    let pins: [Peri<'static, AnyPin>; 8] = [
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
        p.PIN_8.into(),
        p.PIN_9.into(),
    ];
    let mut bit = 0;
    let port = pins.map(|pin| {
        let level = Level::from(config.port.reset_value & (1 << bit) != 0);
        bit += 1;
        PortPin::new(Output::new(pin, level))
    });
    info!("Output port initialized (GPIO2-9 = 0x{:02x})", config.port.reset_value);

    // Analog input against the supply rails
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let pot = Channel::new_pin(p.PIN_26, Pull::None);
    AdcFifo.configure(config.adc.channel);
    core::mem::forget(pot);
    core::mem::forget(adc);
    Delay.delay_us(config.adc.acquisition_time_us);
    info!(
        "ADC initialized (channel {}, GPIO{})",
        config.adc.channel,
        AdcFifo::gpio(config.adc.channel)
    );

    // Serial link, receiver and transmitter enabled
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&config.uart));
    core::mem::forget(uart);
    Uart0.configure();
    let achieved_baud = Uart0.achieved_baud(embassy_rp::clocks::clk_peri_freq());
    info!(
        "UART initialized ({} baud requested, {} achieved)",
        config.uart.baudrate, achieved_baud
    );

    Board {
        port,
        achieved_baud,
    }
}

/// Translate line settings into the embassy-rp UART config
fn uart_config(line: &UartConfig) -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = line.baudrate;
    config.data_bits = match line.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        // StartupConfig::validate runs before bring-up and rejects it
        DataBits::Nine => defmt::panic!("PL011 has no 9-bit mode"),
    };
    config.parity = match line.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    config.stop_bits = match line.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    config
}
