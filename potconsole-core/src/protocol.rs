//! Console command protocol
//!
//! The host sends single ASCII bytes. Anything that is not a known command
//! is ignored.

/// Menu text, sent verbatim once per command cycle
pub const MENU: &str = "\n1 Leer Potenciometro \n2 Enviar ascii \n";

/// Menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Report the current sample as three ASCII digits
    ReadPotentiometer,
    /// Copy the next received byte onto the output port
    ArmForward,
}

impl Command {
    /// Decode a received byte
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'1' => Some(Command::ReadPotentiometer),
            b'2' => Some(Command::ArmForward),
            _ => None,
        }
    }
}
