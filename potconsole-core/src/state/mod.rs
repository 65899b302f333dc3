//! Shared device state
//!
//! Everything the interrupt handler and the main loop exchange lives in one
//! [`DeviceState`]. It is created once at startup and never torn down.

pub mod device;
pub mod mailbox;
pub mod phase;

pub use device::{DeviceState, Snapshot};
pub use mailbox::Mailbox;
pub use phase::Phase;
