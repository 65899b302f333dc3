//! Single-slot byte mailbox
//!
//! One producer (interrupt context) and one consumer (main loop). A new
//! byte overwrites an unconsumed one: there is no queue, the last write
//! wins and the earlier byte is lost.
//!
//! `0` doubles as "empty", so a received NUL byte cannot be told apart
//! from "nothing received yet".

use portable_atomic::{AtomicU8, Ordering};

/// Value of an empty slot
pub const EMPTY: u8 = 0;

/// Single-slot last-write-wins mailbox
#[derive(Debug)]
pub struct Mailbox {
    slot: AtomicU8,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailbox {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(EMPTY),
        }
    }

    /// Deposit a byte, replacing any unconsumed one
    pub fn post(&self, byte: u8) {
        self.slot.store(byte, Ordering::Release);
    }

    /// Look at the waiting byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        match self.slot.load(Ordering::Acquire) {
            EMPTY => None,
            byte => Some(byte),
        }
    }

    /// Consume `byte` if it is still the waiting one
    ///
    /// Returns false when the slot was overwritten since it was peeked, in
    /// which case the newer byte stays for the next iteration.
    pub fn consume(&self, byte: u8) -> bool {
        self.slot
            .compare_exchange(byte, EMPTY, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
