//! Port register triples
//!
//! The PAC gives PORTB, PORTC and PORTD distinct register-block types, so
//! they cannot share one typed accessor. Each block is the same PINx / DDRx
//! / PORTx byte triple, though, so [`PORT_BLOCKS`] keeps one base pointer
//! per port, taken from the PAC and indexed by [`Port::index`]. The access
//! code below is then written once for all ports.

use portio_hal::{Port, PortRegisters, Register};

use crate::pac::{PORTB, PORTC, PORTD};

/// Location of one port's register triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortBlock {
    /// Address of PINx; DDRx and PORTx follow it
    base: *const u8,
}

impl PortBlock {
    /// Block starting at a PAC register-block pointer
    pub const fn at(base: *const u8) -> Self {
        Self { base }
    }

    /// Byte offset of a register within the triple
    pub const fn offset(register: Register) -> usize {
        match register {
            Register::Input => 0,
            Register::Direction => 1,
            Register::Output => 2,
        }
    }

    /// Address of one register in the triple
    pub fn address(&self, register: Register) -> *mut u8 {
        self.base.wrapping_add(Self::offset(register)) as *mut u8
    }
}

/// Register triples for PORTB, PORTC, PORTD
pub const PORT_BLOCKS: [PortBlock; Port::COUNT] = [
    PortBlock::at(PORTB::ptr() as *const u8),
    PortBlock::at(PORTC::ptr() as *const u8),
    PortBlock::at(PORTD::ptr() as *const u8),
];

/// Address of a port register
pub fn address(port: Port, register: Register) -> *mut u8 {
    PORT_BLOCKS[port.index()].address(register)
}

/// Owner of the three port peripherals
///
/// Built from the PAC singletons, so only one can exist per program.
///
/// Writing a 1 to a PINx bit toggles the matching PORTx bit on this part.
/// `write(_, Register::Input, _)` is passed through as-is.
pub struct Atmega328pPorts {
    portb: PORTB,
    portc: PORTC,
    portd: PORTD,
}

impl Atmega328pPorts {
    /// Take ownership of the port peripherals
    pub fn new(portb: PORTB, portc: PORTC, portd: PORTD) -> Self {
        Self {
            portb,
            portc,
            portd,
        }
    }

    /// Give the port peripherals back
    pub fn release(self) -> (PORTB, PORTC, PORTD) {
        (self.portb, self.portc, self.portd)
    }
}

impl PortRegisters for Atmega328pPorts {
    #[inline(always)]
    fn read(&self, port: Port, register: Register) -> u8 {
        // SAFETY: PORT_BLOCKS comes from the PAC register blocks, which this
        // handle owns.
        unsafe { core::ptr::read_volatile(address(port, register)) }
    }

    #[inline(always)]
    fn write(&mut self, port: Port, register: Register, value: u8) {
        // SAFETY: as for read; &mut self serializes writers.
        unsafe { core::ptr::write_volatile(address(port, register), value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_addresses() {
        assert_eq!(address(Port::B, Register::Input) as usize, 0x23);
        assert_eq!(address(Port::B, Register::Direction) as usize, 0x24);
        assert_eq!(address(Port::B, Register::Output) as usize, 0x25);
        assert_eq!(address(Port::C, Register::Direction) as usize, 0x27);
        assert_eq!(address(Port::D, Register::Output) as usize, 0x2B);
    }

    #[test]
    fn test_blocks_follow_pac() {
        assert_eq!(PORT_BLOCKS[Port::B.index()].base as usize, PORTB::ptr() as usize);
        assert_eq!(PORT_BLOCKS[Port::C.index()].base as usize, PORTC::ptr() as usize);
        assert_eq!(PORT_BLOCKS[Port::D.index()].base as usize, PORTD::ptr() as usize);
    }

    #[test]
    fn test_blocks_are_distinct() {
        let mut seen = [false; 0x40];
        for port in Port::ALL {
            for register in Register::ALL {
                let addr = address(port, register) as usize;
                assert!(!seen[addr], "address {:#x} mapped twice", addr);
                seen[addr] = true;
            }
        }
    }
}
