//! Mock hardware for host tests
//!
//! Interior mutability lets the main loop and the interrupt handler hold
//! handles to the same mock, the way both contexts see the same registers.

use core::cell::{Cell, RefCell};

use heapless::Vec;
use potconsole_hal::{Converter, LineError, ParallelPort, UartRx, UartTx};

pub const TX_CAPACITY: usize = 1024;

#[derive(Default)]
pub struct MockUart {
    sent: RefCell<Vec<u8, TX_CAPACITY>>,
    stall: Cell<u32>,
    busy_polls: Cell<u32>,
    rx: Cell<Option<Result<u8, LineError>>>,
}

impl MockUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a full holding register for the next `polls` checks
    pub fn stall(&self, polls: u32) {
        self.stall.set(polls);
    }

    pub fn busy_polls(&self) -> u32 {
        self.busy_polls.get()
    }

    pub fn sent(&self) -> Vec<u8, TX_CAPACITY> {
        self.sent.borrow().clone()
    }

    /// Return everything transmitted so far and start over
    pub fn take_sent(&self) -> Vec<u8, TX_CAPACITY> {
        let sent = self.sent();
        self.sent.borrow_mut().clear();
        sent
    }

    pub fn receive(&self, byte: u8) {
        self.rx.set(Some(Ok(byte)));
    }

    pub fn receive_faulty(&self, error: LineError) {
        self.rx.set(Some(Err(error)));
    }
}

impl UartTx for &MockUart {
    fn is_tx_empty(&self) -> bool {
        let stall = self.stall.get();
        if stall > 0 {
            self.stall.set(stall - 1);
            self.busy_polls.set(self.busy_polls.get() + 1);
            false
        } else {
            true
        }
    }

    fn write_data(&mut self, byte: u8) {
        self.sent
            .borrow_mut()
            .push(byte)
            .expect("mock transmit buffer full");
    }
}

impl UartRx for &MockUart {
    fn take_byte(&mut self) -> Option<Result<u8, LineError>> {
        self.rx.take()
    }
}

#[derive(Default)]
pub struct MockAdc {
    busy: Cell<bool>,
    complete: Cell<bool>,
    value: Cell<u8>,
    starts: Cell<u32>,
    acks: Cell<u32>,
}

impl MockAdc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the running conversion with `value`
    pub fn finish(&self, value: u8) {
        self.busy.set(false);
        self.complete.set(true);
        self.value.set(value);
    }

    pub fn starts(&self) -> u32 {
        self.starts.get()
    }

    pub fn acks(&self) -> u32 {
        self.acks.get()
    }

    pub fn is_pending(&self) -> bool {
        self.complete.get()
    }
}

impl Converter for &MockAdc {
    fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn start(&mut self) {
        self.busy.set(true);
        self.starts.set(self.starts.get() + 1);
    }

    fn is_complete(&self) -> bool {
        self.complete.get()
    }

    fn result(&self) -> u8 {
        self.value.get()
    }

    fn acknowledge(&mut self) {
        self.complete.set(false);
        self.acks.set(self.acks.get() + 1);
    }
}

#[derive(Default)]
pub struct MockPort {
    pub writes: Vec<u8, 64>,
}

impl ParallelPort for MockPort {
    fn write(&mut self, value: u8) {
        self.writes.push(value).expect("mock port log full");
    }

    fn latched(&self) -> u8 {
        self.writes.last().copied().unwrap_or(0)
    }
}
