//! Interrupt binding
//!
//! `UART0_IRQ` and `ADC_IRQ_FIFO` both land in [`dispatch`], which polls
//! every source through `potconsole_core::isr::service`. The handler never
//! blocks: the receive and FIFO flags are cleared by the reads it performs.

use defmt::*;
use embassy_rp::bind_interrupts;
use embassy_rp::interrupt::typelevel::{self, Handler};
use embassy_rp::interrupt::{self, InterruptExt};

use potconsole_core::isr::{self, ByteEvent, Serviced};
use potconsole_hal_rp2040::{AdcFifo, ParallelPort, Uart0};

use crate::shared::{OutputPort, DEVICE, PORT};

/// Console interrupt handler
pub struct ConsoleIrq;

impl Handler<typelevel::UART0_IRQ> for ConsoleIrq {
    unsafe fn on_interrupt() {
        dispatch();
    }
}

impl Handler<typelevel::ADC_IRQ_FIFO> for ConsoleIrq {
    unsafe fn on_interrupt() {
        dispatch();
    }
}

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => ConsoleIrq;
    ADC_IRQ_FIFO => ConsoleIrq;
});

/// Stand-in port for a dispatch before [`install`]; drops forwarded bytes
struct Unattached;

impl ParallelPort for Unattached {
    fn write(&mut self, _value: u8) {}

    fn latched(&self) -> u8 {
        0
    }
}

/// Hand the output port over to interrupt context
pub fn install(port: OutputPort) {
    PORT.lock(|cell| cell.replace(Some(port)));
}

/// Unmask both console interrupts
pub fn enable() {
    interrupt::UART0_IRQ.unpend();
    interrupt::ADC_IRQ_FIFO.unpend();

    // SAFETY: both vectors are bound to `ConsoleIrq`, which only touches
    // the static device state, the port mutex and its own peripherals.
    unsafe {
        interrupt::UART0_IRQ.enable();
        interrupt::ADC_IRQ_FIFO.enable();
    }
}

/// Single dispatch point for both interrupt vectors
fn dispatch() {
    let serviced = PORT.lock(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(port) => isr::service(&DEVICE, &mut Uart0, &mut AdcFifo, port),
            // Sources still have to be acknowledged
            None => isr::service(&DEVICE, &mut Uart0, &mut AdcFifo, &mut Unattached),
        }
    });

    trace_serviced(&serviced);
}

fn trace_serviced(serviced: &Serviced) {
    match serviced.byte {
        Some(ByteEvent::Dropped(error)) => warn!("RX line error, byte dropped: {:?}", error),
        Some(ByteEvent::Forwarded(byte)) => debug!("Forwarded 0x{:02x} to port", byte),
        Some(ByteEvent::Posted(byte)) => trace!("RX: 0x{:02x}", byte),
        None => {}
    }

    if let Some(sample) = serviced.sample {
        trace!("ADC: {}", sample);
    }

    if serviced.is_spurious() {
        trace!("Spurious console interrupt");
    }
}
