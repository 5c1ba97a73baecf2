//! Pin controller
//!
//! Maps a [`PinDescriptor`] onto its port's register triple and performs
//! single-bit read-modify-write cycles there. Every operation touches
//! exactly one bit of one register per step; the seven sibling bits are
//! written back unchanged.
//!
//! # Atomicity
//!
//! Nothing here masks interrupts. `initialize` is two separate
//! read-modify-write cycles (direction, then output), and an interrupt
//! handler writing the same register between the read and the write of
//! either cycle will have its change overwritten. Callers sharing a port
//! with interrupt handlers must wrap calls in their own critical section.

use portio_hal::{PortRegisters, Register};

use crate::config::{PinDescriptor, PinMode, PinState};

/// Drives pins through a register file
pub struct PinController<R> {
    registers: R,
}

impl<R: PortRegisters> PinController<R> {
    /// Create a controller over a register file
    ///
    /// Pass `&mut regs` to keep ownership of the register file.
    pub fn new(registers: R) -> Self {
        Self { registers }
    }

    /// Configure direction and initial level of a pin
    ///
    /// Sets the direction bit for [`PinMode::Output`] and clears it for
    /// [`PinMode::Input`], then sets or clears the output bit according to
    /// `pin.state`. Calling it again with the same descriptor changes
    /// nothing.
    pub fn initialize(&mut self, pin: &PinDescriptor) {
        #[cfg(feature = "defmt")]
        defmt::trace!("init {}", pin);

        let mask = pin.mask();
        match pin.mode {
            PinMode::Output => self.registers.set_bits(pin.port, Register::Direction, mask),
            PinMode::Input => self.registers.clear_bits(pin.port, Register::Direction, mask),
        }
        self.write_output(pin, pin.state);
    }

    /// Set the latched output level of a pin
    ///
    /// `pin.state` is ignored. The direction register is left alone, so on
    /// an input pin this only changes the latch, which takes effect once
    /// the pin is switched to output.
    pub fn write(&mut self, pin: &PinDescriptor, state: PinState) {
        #[cfg(feature = "defmt")]
        defmt::trace!("write {}{}={}", pin.port, pin.pin, state);

        self.write_output(pin, state);
    }

    /// Read the sensed level of a pin: 1 if high, 0 otherwise
    pub fn read(&self, pin: &PinDescriptor) -> u8 {
        let value = self.registers.read(pin.port, Register::Input);
        (value >> pin.pin.get()) & 1
    }

    /// Read the sensed level of a pin as a [`PinState`]
    pub fn read_state(&self, pin: &PinDescriptor) -> PinState {
        PinState::from_bit(self.read(pin) != 0)
    }

    /// Flip the latched output level of a pin
    pub fn toggle(&mut self, pin: &PinDescriptor) {
        #[cfg(feature = "defmt")]
        defmt::trace!("toggle {}{}", pin.port, pin.pin);

        let mask = pin.mask();
        self.registers
            .modify(pin.port, Register::Output, |v| v ^ mask);
    }

    /// Current direction of a pin, decoded from the direction register
    pub fn mode(&self, pin: &PinDescriptor) -> PinMode {
        PinMode::from_bit(self.bit(pin, Register::Direction))
    }

    /// Current latched output level of a pin
    pub fn output_state(&self, pin: &PinDescriptor) -> PinState {
        PinState::from_bit(self.bit(pin, Register::Output))
    }

    /// Borrow the register file
    pub fn registers(&self) -> &R {
        &self.registers
    }

    /// Mutably borrow the register file
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.registers
    }

    /// Give the register file back
    pub fn release(self) -> R {
        self.registers
    }

    fn write_output(&mut self, pin: &PinDescriptor, state: PinState) {
        let mask = pin.mask();
        match state {
            PinState::High => self.registers.set_bits(pin.port, Register::Output, mask),
            PinState::Low => self.registers.clear_bits(pin.port, Register::Output, mask),
        }
    }

    fn bit(&self, pin: &PinDescriptor, register: Register) -> bool {
        self.registers.read(pin.port, register) & pin.mask() != 0
    }
}
