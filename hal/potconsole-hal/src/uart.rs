//! UART serial communication abstractions
//!
//! The console talks to the UART at the data-register level: the transmit
//! side exposes "holding register empty" and a one-byte write, the receive
//! side hands over whatever byte the receiver latched.

/// UART transmitter
///
/// Register-level transmit interface. Busy-waiting belongs to the caller,
/// see `potconsole_core::console::Transmitter`.
pub trait UartTx {
    /// Check whether the transmit holding register can accept a byte
    fn is_tx_empty(&self) -> bool;

    /// Load a byte into the transmit holding register
    ///
    /// Only valid after [`is_tx_empty`](Self::is_tx_empty) returned true.
    fn write_data(&mut self, byte: u8);
}

/// UART receiver
///
/// Polled from interrupt context.
pub trait UartRx {
    /// Take the received byte, if one is waiting
    ///
    /// Reading the byte acknowledges the receive event. A byte that arrived
    /// with a line fault is still consumed and reported as an error.
    fn take_byte(&mut self) -> Option<Result<u8, LineError>>;
}

/// Receive-side line faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Stop bit not found where expected
    Framing,
    /// Parity bit mismatch
    Parity,
    /// Line held low for longer than a frame
    Break,
    /// A byte arrived before the previous one was read
    Overrun,
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 9600 baud, 8 data bits, no parity, one stop bit
    pub const CONSOLE: Self = Self {
        baudrate: 9600,
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
    };

    /// Number of bits on the wire per character, start bit included
    pub const fn frame_bits(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Time to shift out one character, in microseconds (rounded up)
    ///
    /// Upper bound on how long a transmit busy-wait can last once the
    /// shifter is running.
    pub const fn frame_time_us(&self) -> u32 {
        let bits = self.frame_bits() as u64 * 1_000_000;
        let baud = self.baudrate as u64;
        if baud == 0 {
            return u32::MAX;
        }
        ((bits + baud - 1) / baud) as u32
    }

    /// Deviation of an achieved baud rate from the configured one, in ppm
    pub fn baud_error_ppm(&self, achieved: u32) -> u32 {
        let target = self.baudrate as u64;
        if target == 0 {
            return u32::MAX;
        }
        let diff = (achieved as u64).abs_diff(target);
        (diff * 1_000_000 / target) as u32
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::CONSOLE
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
