//! Three-digit ASCII formatting
//!
//! Readings go out as exactly three digits with leading zeros kept:
//! 7 is sent as "007".

/// ASCII code of '0'
const ASCII_ZERO: u8 = 0x30;

/// Hundreds, tens and units of an 8-bit value as ASCII digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits([u8; 3]);

impl Digits {
    /// Split `value` into its three decimal digits
    pub const fn from_value(value: u8) -> Self {
        let hundreds = value / 100;
        let tens = (value - hundreds * 100) / 10;
        let units = value - hundreds * 100 - tens * 10;

        Self([
            hundreds + ASCII_ZERO,
            tens + ASCII_ZERO,
            units + ASCII_ZERO,
        ])
    }

    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        core::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Recombine the digits into the value they were formatted from
    pub const fn value(&self) -> u8 {
        let [h, t, u] = self.0;
        (h - ASCII_ZERO) * 100 + (t - ASCII_ZERO) * 10 + (u - ASCII_ZERO)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Digits {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
