//! Device state shared between interrupt and thread mode
//!
//! No locks: every field is a single byte, so each access is one native
//! load or store on any target and a reading can never tear. The main loop
//! may still see a sample that is one conversion old.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use super::mailbox::Mailbox;

/// Process-wide console state
#[derive(Debug)]
pub struct DeviceState {
    /// Last received command byte (written by the interrupt handler)
    command: Mailbox,
    /// Latest conversion result (written by the interrupt handler)
    sample: AtomicU8,
    /// Next received byte goes to the output port
    forward: AtomicBool,
    /// Menu has been emitted since the last completed command
    menu_printed: AtomicBool,
}

/// Point-in-time copy of the shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub command: Option<u8>,
    pub sample: u8,
    pub forwarding: bool,
    pub menu_printed: bool,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    /// Power-on state: no command, zero sample, menu pending
    pub const fn new() -> Self {
        Self {
            command: Mailbox::new(),
            sample: AtomicU8::new(0),
            forward: AtomicBool::new(false),
            menu_printed: AtomicBool::new(false),
        }
    }

    /// Received-command mailbox
    pub fn command(&self) -> &Mailbox {
        &self.command
    }

    /// Latest conversion result
    pub fn sample(&self) -> u8 {
        self.sample.load(Ordering::Relaxed)
    }

    pub fn set_sample(&self, value: u8) {
        self.sample.store(value, Ordering::Relaxed);
    }

    /// Check whether the next received byte will be forwarded
    pub fn is_forwarding(&self) -> bool {
        self.forward.load(Ordering::Acquire)
    }

    pub fn arm_forward(&self) {
        self.forward.store(true, Ordering::Release);
    }

    pub fn disarm_forward(&self) {
        self.forward.store(false, Ordering::Release);
    }

    /// Arm forward mode for the command `byte`, then consume it
    ///
    /// Forward mode is live before the command leaves the mailbox, so a byte
    /// arriving in between is forwarded rather than posted. If the mailbox
    /// was overwritten before arming, forward mode is dropped again and the
    /// newer byte stays for the next pass.
    pub fn arm_forward_on(&self, byte: u8) -> bool {
        self.arm_forward();
        if self.command.consume(byte) {
            true
        } else {
            self.disarm_forward();
            false
        }
    }

    /// Check whether the menu has been printed this cycle
    pub fn is_menu_printed(&self) -> bool {
        self.menu_printed.load(Ordering::Acquire)
    }

    pub fn mark_menu_printed(&self) {
        self.menu_printed.store(true, Ordering::Release);
    }

    /// Ask the main loop to print the menu again
    pub fn request_menu(&self) {
        self.menu_printed.store(false, Ordering::Release);
    }

    /// Copy every field
    ///
    /// Fields are read one at a time; an interrupt between reads can make
    /// the copy inconsistent. Use for diagnostics only.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            command: self.command.peek(),
            sample: self.sample(),
            forwarding: self.is_forwarding(),
            menu_printed: self.is_menu_printed(),
        }
    }
}
