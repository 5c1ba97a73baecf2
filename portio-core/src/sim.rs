//! Simulated register file
//!
//! An in-memory stand-in for the DDRx / PORTx / PINx registers, used by
//! host-side tests. Direction and output registers behave as plain
//! latches. The input register is driven from outside through
//! [`SimRegisterFile::drive_input`], the way an external signal drives a
//! real pad.

use portio_hal::{Port, PortRegisters, Register};

use crate::config::{PinNumber, PinState};

/// Three ports of three registers each, all zero at reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimRegisterFile {
    regs: [[u8; Register::COUNT]; Port::COUNT],
}

impl SimRegisterFile {
    /// Create a register file in its reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a register file with preset contents, indexed `[port][register]`
    pub fn with_contents(regs: [[u8; Register::COUNT]; Port::COUNT]) -> Self {
        Self { regs }
    }

    /// Apply an external level to one pad
    pub fn drive_input(&mut self, port: Port, pin: PinNumber, state: PinState) {
        let reg = &mut self.regs[port.index()][Register::Input.index()];
        match state {
            PinState::High => *reg |= pin.mask(),
            PinState::Low => *reg &= !pin.mask(),
        }
    }

    /// Apply external levels to a whole port
    pub fn set_input(&mut self, port: Port, value: u8) {
        self.regs[port.index()][Register::Input.index()] = value;
    }

    /// Copy of all register contents, indexed `[port][register]`
    pub fn snapshot(&self) -> [[u8; Register::COUNT]; Port::COUNT] {
        self.regs
    }
}

impl PortRegisters for SimRegisterFile {
    fn read(&self, port: Port, register: Register) -> u8 {
        self.regs[port.index()][register.index()]
    }

    fn write(&mut self, port: Port, register: Register, value: u8) {
        self.regs[port.index()][register.index()] = value;
    }
}
