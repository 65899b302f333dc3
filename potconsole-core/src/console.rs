//! Blocking serial transmitter
//!
//! The target has no scheduler to yield to, so transmitting busy-waits on
//! the holding register. Each wait lasts at most one character time
//! ([`UartConfig::frame_time_us`](potconsole_hal::UartConfig::frame_time_us),
//! about 1.04 ms at 9600 8N1). If the hardware never drains, it blocks
//! forever.

use core::convert::Infallible;

use potconsole_hal::UartTx;

/// Byte and text output over a UART
pub struct Transmitter<T> {
    uart: T,
}

impl<T: UartTx> Transmitter<T> {
    pub fn new(uart: T) -> Self {
        Self { uart }
    }

    /// Send one byte
    ///
    /// Spins until the transmit holding register is empty, then loads the
    /// byte and returns while it is still being shifted out.
    pub fn transmit(&mut self, byte: u8) {
        while !self.uart.is_tx_empty() {
            core::hint::spin_loop();
        }
        self.uart.write_data(byte);
    }

    /// Send text in order, stopping at the end or at an embedded NUL
    pub fn print(&mut self, text: &str) {
        self.print_bytes(text.as_bytes());
    }

    /// Byte-level variant of [`print`](Self::print)
    pub fn print_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().take_while(|&&b| b != 0) {
            self.transmit(byte);
        }
    }
}

impl<T> embedded_io::ErrorType for Transmitter<T> {
    type Error = Infallible;
}

impl<T: UartTx> embedded_io::Write for Transmitter<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.transmit(byte);
        }
        Ok(buf.len())
    }

    /// Wait until the last loaded byte has left the holding register
    fn flush(&mut self) -> Result<(), Self::Error> {
        while !self.uart.is_tx_empty() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}
