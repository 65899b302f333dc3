//! State shared between thread mode and the interrupt handler
//!
//! The console state is lock-free (single-byte atomics). The output port is
//! owned by interrupt context; its mutex is only ever locked from the
//! interrupt handler, after boot installs the pins.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use potconsole_core::DeviceState;
use potconsole_hal_rp2040::PortPin;

/// Eight GPIO lines, bit 0 first
pub type OutputPort = [PortPin; 8];

/// Console state: mailbox, sample, forward and menu flags
pub static DEVICE: DeviceState = DeviceState::new();

/// Parallel output port, written by the interrupt handler in forward mode
pub static PORT: Mutex<CriticalSectionRawMutex, RefCell<Option<OutputPort>>> =
    Mutex::new(RefCell::new(None));
