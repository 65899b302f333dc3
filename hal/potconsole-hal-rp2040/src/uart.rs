//! UART0 register access
//!
//! The PL011 is brought up by `embassy_rp::uart::Uart::new_blocking`, which
//! sets the baud divisors and the 8N1 frame. [`Uart0::configure`] then
//! turns the FIFOs off and enables the receive interrupt, so every received
//! byte raises `UART0_IRQ` and the transmit side holds one byte at a time.

use embassy_rp::pac;
use potconsole_hal::{LineError, UartRx, UartTx};

/// UART0 data and flag registers
#[derive(Debug, Clone, Copy, Default)]
pub struct Uart0;

impl Uart0 {
    /// Switch to one-byte holding registers and enable the receive interrupt
    ///
    /// Call once, after the embassy-rp driver has configured the line.
    pub fn configure(&self) {
        let uart = pac::UART0;
        uart.uartlcr_h().modify(|w| w.set_fen(false));
        uart.uartimsc().modify(|w| w.set_rxim(true));
    }

    /// Baud rate produced by the programmed divisors
    pub fn achieved_baud(&self, clk_peri_hz: u32) -> u32 {
        let uart = pac::UART0;
        let ibrd = uart.uartibrd().read().baud_divint();
        let fbrd = uart.uartfbrd().read().baud_divfrac();
        pl011_baud(clk_peri_hz, ibrd, fbrd)
    }
}

/// PL011 baud rate: clk / (16 × (IBRD + FBRD/64))
pub fn pl011_baud(clk_peri_hz: u32, ibrd: u16, fbrd: u8) -> u32 {
    let divisor = ibrd as u64 * 64 + fbrd as u64;
    if divisor == 0 {
        return 0;
    }
    (clk_peri_hz as u64 * 4 / divisor) as u32
}

impl UartTx for Uart0 {
    fn is_tx_empty(&self) -> bool {
        !pac::UART0.uartfr().read().txff()
    }

    fn write_data(&mut self, byte: u8) {
        pac::UART0.uartdr().write(|w| w.set_data(byte));
    }
}

impl UartRx for Uart0 {
    fn take_byte(&mut self) -> Option<Result<u8, LineError>> {
        let uart = pac::UART0;
        if uart.uartfr().read().rxfe() {
            return None;
        }

        // Reading DR clears the receive interrupt
        let dr = uart.uartdr().read();
        Some(if dr.oe() {
            Err(LineError::Overrun)
        } else if dr.be() {
            Err(LineError::Break)
        } else if dr.fe() {
            Err(LineError::Framing)
        } else if dr.pe() {
            Err(LineError::Parity)
        } else {
            Ok(dr.data())
        })
    }
}
