//! Console phases
//!
//! The main loop keeps no state variable of its own: its phase is a
//! function of the shared flags and the waiting command byte.

use super::device::Snapshot;
use crate::protocol::Command;

/// Main loop phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Menu not yet printed this cycle
    MenuPrint,
    /// Menu shown, no command waiting
    AwaitingCommand,
    /// Command '1' waiting
    ReadPotentiometer,
    /// Command '2' waiting
    ArmForward,
    /// Forward mode armed, next received byte goes to the port
    Forwarding,
    /// An unknown byte sits in the mailbox and will be left alone
    Ignoring(u8),
}

impl Phase {
    /// Classify a snapshot of the shared state
    pub fn of(snapshot: &Snapshot) -> Self {
        if !snapshot.menu_printed {
            return Phase::MenuPrint;
        }

        match snapshot.command {
            Some(byte) => match Command::from_byte(byte) {
                Some(Command::ReadPotentiometer) => Phase::ReadPotentiometer,
                Some(Command::ArmForward) => Phase::ArmForward,
                None => Phase::Ignoring(byte),
            },
            None if snapshot.forwarding => Phase::Forwarding,
            None => Phase::AwaitingCommand,
        }
    }

    /// Check whether the loop has something to do in this phase
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            Phase::MenuPrint | Phase::ReadPotentiometer | Phase::ArmForward
        )
    }
}
