//! Analog-to-digital converter abstraction
//!
//! One pre-selected channel, converted on request. The thread-mode loop
//! starts conversions; the interrupt handler collects results.

/// Single-channel ADC
pub trait Converter {
    /// Check whether a conversion is currently running
    fn is_busy(&self) -> bool;

    /// Request a new conversion
    ///
    /// Callers only issue this while [`is_busy`](Self::is_busy) is false.
    fn start(&mut self);

    /// Check whether a completed result is waiting
    fn is_complete(&self) -> bool;

    /// Read the completed result, left-justified to 8 bits
    fn result(&self) -> u8;

    /// Acknowledge the completion flag
    ///
    /// Must be called once per completed conversion. A flag that is never
    /// cleared keeps the interrupt asserted.
    fn acknowledge(&mut self);
}

/// Reduce a right-aligned conversion result of `bits` resolution to its
/// top 8 bits
///
/// `bits` above 16 is treated as 16.
pub const fn left_justify(raw: u16, bits: u8) -> u8 {
    let bits = if bits > 16 { 16 } else { bits };
    if bits <= 8 {
        (raw << (8 - bits)) as u8
    } else {
        (raw >> (bits - 8)) as u8
    }
}
