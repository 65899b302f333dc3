//! Main control loop
//!
//! Thread-mode side of the console. Each [`Console::poll`] is one pass of
//! the firmware's endless loop:
//!
//! 1. Keep the converter busy: start a conversion if none is running
//! 2. Print the menu once per command cycle
//! 3. Act on the waiting command byte, consuming it exactly once
//!
//! Forwarding itself happens in the interrupt handler; the loop only arms
//! it.

use potconsole_hal::{Converter, UartTx};

use crate::console::Transmitter;
use crate::format::Digits;
use crate::protocol::{Command, MENU};
use crate::state::{DeviceState, Phase};

/// Command handled by one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handled {
    /// Sample reported as three digits
    Reading(Digits),
    /// Forward mode armed for the next received byte
    ForwardArmed,
}

/// What one poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub conversion_started: bool,
    pub menu_printed: bool,
    pub handled: Option<Handled>,
}

/// Menu console driven by the main loop
pub struct Console<'a, T, A> {
    state: &'a DeviceState,
    tx: Transmitter<T>,
    adc: A,
}

impl<'a, T: UartTx, A: Converter> Console<'a, T, A> {
    pub fn new(state: &'a DeviceState, uart: T, adc: A) -> Self {
        Self {
            state,
            tx: Transmitter::new(uart),
            adc,
        }
    }

    /// Run one loop iteration
    pub fn poll(&mut self) -> Tick {
        let conversion_started = self.trigger_conversion();

        let menu_printed = !self.state.is_menu_printed();
        if menu_printed {
            self.tx.print(MENU);
            self.state.mark_menu_printed();
        }

        let handled = self.dispatch_command();

        Tick {
            conversion_started,
            menu_printed,
            handled,
        }
    }

    /// Current phase, derived from the shared state
    pub fn phase(&self) -> Phase {
        Phase::of(&self.state.snapshot())
    }

    pub fn transmitter(&mut self) -> &mut Transmitter<T> {
        &mut self.tx
    }

    /// Request a conversion unless one is already running
    fn trigger_conversion(&mut self) -> bool {
        if self.adc.is_busy() {
            return false;
        }
        self.adc.start();
        true
    }

    fn dispatch_command(&mut self) -> Option<Handled> {
        let byte = self.state.command().peek()?;
        // Unknown bytes stay in the mailbox until overwritten
        let command = Command::from_byte(byte)?;

        match command {
            Command::ReadPotentiometer => {
                // Overwritten since the peek: handle the newer byte next pass
                if !self.state.command().consume(byte) {
                    return None;
                }
                Some(Handled::Reading(self.report_reading()))
            }
            Command::ArmForward => self
                .state
                .arm_forward_on(byte)
                .then_some(Handled::ForwardArmed),
        }
    }

    fn report_reading(&mut self) -> Digits {
        self.state.request_menu();
        self.state.disarm_forward();

        let digits = Digits::from_value(self.state.sample());
        for &digit in digits.as_bytes() {
            self.tx.transmit(digit);
        }
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isr;
    use crate::mock::{MockAdc, MockPort, MockUart};
    use proptest::prelude::*;

    struct Rig {
        state: DeviceState,
        uart: MockUart,
        adc: MockAdc,
        port: MockPort,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                state: DeviceState::new(),
                uart: MockUart::new(),
                adc: MockAdc::new(),
                port: MockPort::default(),
            }
        }

        fn console(&self) -> Console<'_, &MockUart, &MockAdc> {
            Console::new(&self.state, &self.uart, &self.adc)
        }

        /// Deliver a byte through the interrupt handler
        fn receive(&mut self, byte: u8) -> isr::Serviced {
            self.uart.receive(byte);
            self.interrupt()
        }

        /// Complete the running conversion through the interrupt handler
        fn convert(&mut self, value: u8) -> isr::Serviced {
            self.adc.finish(value);
            self.interrupt()
        }

        fn interrupt(&mut self) -> isr::Serviced {
            isr::service(&self.state, &mut &self.uart, &mut &self.adc, &mut self.port)
        }

        fn poll(&self) -> Tick {
            self.console().poll()
        }
    }

    #[test]
    fn test_first_poll_prints_menu() {
        let rig = Rig::new();

        let tick = rig.poll();

        assert!(tick.menu_printed);
        assert_eq!(tick.handled, None);
        assert_eq!(rig.uart.take_sent().as_slice(), MENU.as_bytes());
        assert!(rig.state.is_menu_printed());
    }

    #[test]
    fn test_menu_prints_once_while_idle() {
        let rig = Rig::new();
        rig.poll();
        rig.uart.take_sent();

        for _ in 0..10 {
            let tick = rig.poll();
            assert!(!tick.menu_printed);
        }
        assert!(rig.uart.sent().is_empty());
    }

    #[test]
    fn test_read_potentiometer_sends_three_digits() {
        let mut rig = Rig::new();
        rig.poll();
        rig.convert(7);
        rig.uart.take_sent();

        rig.receive(b'1');
        let tick = rig.poll();

        assert_eq!(tick.handled, Some(Handled::Reading(Digits::from_value(7))));
        assert_eq!(rig.uart.take_sent().as_slice(), b"007");
        assert_eq!(rig.state.command().peek(), None);

        // Menu comes back before the next command
        let tick = rig.poll();
        assert!(tick.menu_printed);
        assert_eq!(rig.uart.take_sent().as_slice(), MENU.as_bytes());
    }

    #[test]
    fn test_reading_uses_latest_sample() {
        let mut rig = Rig::new();
        rig.poll();
        rig.convert(10);
        rig.poll();
        rig.convert(255);
        rig.uart.take_sent();

        rig.receive(b'1');
        rig.poll();

        assert_eq!(rig.uart.take_sent().as_slice(), b"255");
    }

    #[test]
    fn test_command_pending_at_power_on_follows_menu() {
        let mut rig = Rig::new();
        rig.convert(42);
        rig.receive(b'1');

        let tick = rig.poll();

        assert!(tick.menu_printed);
        assert!(tick.handled.is_some());
        let sent = rig.uart.take_sent();
        let (menu, digits) = sent.split_at(MENU.len());
        assert_eq!(menu, MENU.as_bytes());
        assert_eq!(digits, b"042");
    }

    #[test]
    fn test_arm_forward_then_forward_byte() {
        let mut rig = Rig::new();
        rig.poll();
        rig.uart.take_sent();

        rig.receive(b'2');
        let tick = rig.poll();
        assert_eq!(tick.handled, Some(Handled::ForwardArmed));
        assert!(rig.state.is_forwarding());
        assert_eq!(rig.console().phase(), Phase::Forwarding);
        // Arming sends nothing and does not reprint the menu
        assert!(rig.uart.sent().is_empty());

        rig.receive(b'B');
        assert_eq!(rig.port.writes.as_slice(), b"B");
        assert!(!rig.state.is_forwarding());

        let tick = rig.poll();
        assert!(tick.menu_printed);
        assert_eq!(tick.handled, None);
        assert_eq!(rig.uart.take_sent().as_slice(), MENU.as_bytes());

        // Written exactly once
        rig.poll();
        assert_eq!(rig.port.writes.as_slice(), b"B");
    }

    #[test]
    fn test_forwarded_digit_is_not_a_command() {
        let mut rig = Rig::new();
        rig.poll();
        rig.receive(b'2');
        rig.poll();
        rig.uart.take_sent();

        rig.receive(b'1');
        let tick = rig.poll();

        assert_eq!(rig.port.writes.as_slice(), b"1");
        assert_eq!(tick.handled, None);
        // Only the menu, no reading
        assert_eq!(rig.uart.take_sent().as_slice(), MENU.as_bytes());
    }

    #[test]
    fn test_unknown_byte_is_ignored() {
        let mut rig = Rig::new();
        rig.poll();
        rig.uart.take_sent();

        rig.receive(b'x');
        let before = rig.state.snapshot();
        let tick = rig.poll();

        assert_eq!(tick.handled, None);
        assert!(!tick.menu_printed);
        assert_eq!(rig.state.snapshot(), before);
        assert!(rig.uart.sent().is_empty());
        assert!(rig.port.writes.is_empty());
        assert_eq!(rig.console().phase(), Phase::Ignoring(b'x'));
    }

    #[test]
    fn test_unknown_byte_is_replaced_by_next_command() {
        let mut rig = Rig::new();
        rig.poll();
        rig.receive(b'x');
        rig.poll();

        rig.receive(b'2');
        let tick = rig.poll();

        assert_eq!(tick.handled, Some(Handled::ForwardArmed));
    }

    #[test]
    fn test_read_disarms_forward_mode() {
        let rig = Rig::new();
        rig.poll();
        rig.state.arm_forward();

        // '1' already in the mailbox when forward mode got armed
        rig.state.command().post(b'1');
        rig.poll();

        assert!(!rig.state.is_forwarding());
    }

    #[test]
    fn test_conversion_started_only_when_idle() {
        let mut rig = Rig::new();

        let tick = rig.poll();
        assert!(tick.conversion_started);
        assert_eq!(rig.adc.starts(), 1);

        // Still converting: no duplicate start requests
        for _ in 0..5 {
            assert!(!rig.poll().conversion_started);
        }
        assert_eq!(rig.adc.starts(), 1);

        rig.convert(99);
        assert!(rig.poll().conversion_started);
        assert_eq!(rig.adc.starts(), 2);
        assert_eq!(rig.adc.acks(), 1);
    }

    #[test]
    fn test_phase_walk() {
        let mut rig = Rig::new();
        assert_eq!(rig.console().phase(), Phase::MenuPrint);

        rig.poll();
        assert_eq!(rig.console().phase(), Phase::AwaitingCommand);

        rig.receive(b'1');
        assert_eq!(rig.console().phase(), Phase::ReadPotentiometer);

        rig.poll();
        assert_eq!(rig.console().phase(), Phase::MenuPrint);

        rig.poll();
        rig.receive(b'2');
        assert_eq!(rig.console().phase(), Phase::ArmForward);
    }

    #[test]
    fn test_console_text_through_embedded_io() {
        use embedded_io::Write;

        let rig = Rig::new();
        let mut console = rig.console();
        write!(console.transmitter(), "{}", 12).unwrap();

        assert_eq!(rig.uart.sent().as_slice(), b"12");
    }

    /// Host-side model of what the console should emit
    #[derive(Default)]
    struct Model {
        forwarding: bool,
        forwarded: std::vec::Vec<u8>,
    }

    proptest! {
        #[test]
        fn prop_bytes_are_forwarded_or_interpreted(
            bytes in proptest::collection::vec(any::<u8>(), 0..40),
            sample in any::<u8>(),
        ) {
            let mut rig = Rig::new();
            rig.poll();
            rig.convert(sample);
            let mut model = Model::default();

            for byte in bytes {
                rig.uart.take_sent();
                rig.receive(byte);

                if model.forwarding {
                    model.forwarded.push(byte);
                    model.forwarding = false;
                    let tick = rig.poll();
                    prop_assert!(tick.menu_printed);
                    prop_assert_eq!(tick.handled, None);
                    continue;
                }

                let tick = rig.poll();
                match Command::from_byte(byte) {
                    Some(Command::ReadPotentiometer) => {
                        let digits = Digits::from_value(sample);
                        prop_assert_eq!(tick.handled, Some(Handled::Reading(digits)));
                        let sent = rig.uart.take_sent();
                        prop_assert_eq!(sent.as_slice(), digits.as_bytes());
                        // Reprint before the next command
                        prop_assert!(rig.poll().menu_printed);
                    }
                    Some(Command::ArmForward) => {
                        model.forwarding = true;
                        prop_assert_eq!(tick.handled, Some(Handled::ForwardArmed));
                    }
                    None => {
                        prop_assert_eq!(tick.handled, None);
                        prop_assert!(rig.uart.sent().is_empty());
                    }
                }
            }

            prop_assert_eq!(rig.port.writes.as_slice(), model.forwarded.as_slice());
            prop_assert_eq!(rig.state.is_forwarding(), model.forwarding);
        }
    }
}
