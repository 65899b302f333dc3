//! ADC single-shot conversions
//!
//! RP2040 has a single 12-bit ADC. `embassy_rp::adc::Adc::new_blocking`
//! powers it up and `Channel::new_pin` puts the input pin in analog mode;
//! [`AdcFifo::configure`] then selects the channel and routes completed
//! conversions into the result FIFO, whose non-empty level raises
//! `ADC_IRQ_FIFO`.
//!
//! Register mapping:
//! - busy: `CS.READY` low
//! - start: `CS.START_ONCE`
//! - complete: FIFO level non-zero
//! - result: `RESULT`, top 8 of 12 bits
//! - acknowledge: drain the FIFO

use embassy_rp::pac;
use potconsole_hal::adc::left_justify;
use potconsole_hal::Converter;

/// RP2040 ADC resolution
pub const RESOLUTION_BITS: u8 = 12;

/// Number of analog inputs (ADC0..ADC3 plus temperature sensor)
const CHANNELS: u8 = 5;

/// ADC control, result and FIFO registers
#[derive(Debug, Clone, Copy, Default)]
pub struct AdcFifo;

impl AdcFifo {
    /// Select `channel` and enable the FIFO interrupt at one entry
    pub fn configure(&self, channel: u8) {
        let adc = pac::ADC;
        adc.cs().modify(|w| w.set_ainsel(channel % CHANNELS));
        adc.fcs().modify(|w| {
            w.set_en(true);
            w.set_shift(false);
            w.set_thresh(1);
        });
        adc.inte().write(|w| w.set_fifo(true));
    }

    /// GPIO pin of an external analog channel
    pub fn gpio(channel: u8) -> Option<u8> {
        match channel {
            0..=3 => Some(26 + channel),
            _ => None,
        }
    }
}

impl Converter for AdcFifo {
    fn is_busy(&self) -> bool {
        !pac::ADC.cs().read().ready()
    }

    fn start(&mut self) {
        pac::ADC.cs().modify(|w| w.set_start_once(true));
    }

    fn is_complete(&self) -> bool {
        pac::ADC.fcs().read().level() > 0
    }

    fn result(&self) -> u8 {
        left_justify(pac::ADC.result().read().result(), RESOLUTION_BITS)
    }

    fn acknowledge(&mut self) {
        let adc = pac::ADC;
        while adc.fcs().read().level() > 0 {
            let _ = adc.fifo().read();
        }
    }
}
