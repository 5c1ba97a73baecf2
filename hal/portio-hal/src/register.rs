//! Port register vocabulary
//!
//! Each port group is backed by three 8-bit registers:
//!
//! | Register | AVR name | Meaning per bit |
//! |---|---|---|
//! | [`Register::Direction`] | `DDRx` | 0 = input, 1 = output |
//! | [`Register::Output`] | `PORTx` | latched drive level |
//! | [`Register::Input`] | `PINx` | sensed pad level |
//!
//! [`PortRegisters`] is the seam between the pin controller and the
//! storage behind those registers. None of its methods mask interrupts:
//! a [`PortRegisters::modify`] that races an interrupt handler touching
//! the same register can lose that handler's update.

/// One of the three 8-bit port groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Port {
    /// PORTB (DDRB / PORTB / PINB)
    B = 0,
    /// PORTC (DDRC / PORTC / PINC)
    C = 1,
    /// PORTD (DDRD / PORTD / PIND)
    D = 2,
}

impl Port {
    /// Number of port groups
    pub const COUNT: usize = 3;

    /// All port groups, in table order
    pub const ALL: [Port; Port::COUNT] = [Port::B, Port::C, Port::D];

    /// Index of this port in per-port lookup tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The port letter as written in pin names ("PB0" -> 'B')
    pub const fn letter(self) -> char {
        match self {
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
        }
    }

    /// Look up a port by letter (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'B' => Some(Port::B),
            'C' => Some(Port::C),
            'D' => Some(Port::D),
            _ => None,
        }
    }
}

/// One register of a port's register triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Data direction register (DDRx)
    Direction = 0,
    /// Output / data register (PORTx)
    Output = 1,
    /// Input pins register (PINx)
    Input = 2,
}

impl Register {
    /// Number of registers per port
    pub const COUNT: usize = 3;

    /// All registers, in table order
    pub const ALL: [Register; Register::COUNT] =
        [Register::Direction, Register::Output, Register::Input];

    /// Index of this register within a port's triple
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Byte-wide access to the port register triples
///
/// Implementations only need `read` and `write`; the bit helpers are
/// built on a single read-modify-write cycle.
pub trait PortRegisters {
    /// Read the full register
    fn read(&self, port: Port, register: Register) -> u8;

    /// Write the full register
    fn write(&mut self, port: Port, register: Register, value: u8);

    /// Read the register, transform the value, write it back
    fn modify<F>(&mut self, port: Port, register: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(port, register);
        self.write(port, register, f(value));
    }

    /// Set the bits in `mask`, leaving all others untouched
    fn set_bits(&mut self, port: Port, register: Register, mask: u8) {
        self.modify(port, register, |v| v | mask);
    }

    /// Clear the bits in `mask`, leaving all others untouched
    fn clear_bits(&mut self, port: Port, register: Register, mask: u8) {
        self.modify(port, register, |v| v & !mask);
    }
}

impl<R: PortRegisters + ?Sized> PortRegisters for &mut R {
    fn read(&self, port: Port, register: Register) -> u8 {
        (**self).read(port, register)
    }

    fn write(&mut self, port: Port, register: Register, value: u8) {
        (**self).write(port, register, value)
    }
}
