//! Pin descriptor types

use portio_hal::Port;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PinError;

/// Bit position within an 8-bit port (0..=7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinNumber(u8);

impl PinNumber {
    /// Highest valid pin number
    pub const MAX: u8 = 7;

    pub const PIN_0: PinNumber = PinNumber(0);
    pub const PIN_1: PinNumber = PinNumber(1);
    pub const PIN_2: PinNumber = PinNumber(2);
    pub const PIN_3: PinNumber = PinNumber(3);
    pub const PIN_4: PinNumber = PinNumber(4);
    pub const PIN_5: PinNumber = PinNumber(5);
    pub const PIN_6: PinNumber = PinNumber(6);
    pub const PIN_7: PinNumber = PinNumber(7);

    /// Create a pin number, rejecting anything outside 0..=7
    pub const fn new(n: u8) -> Result<Self, PinError> {
        if n > Self::MAX {
            Err(PinError::InvalidPin(n))
        } else {
            Ok(PinNumber(n))
        }
    }

    /// The raw bit position
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this position
    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for PinNumber {
    type Error = PinError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PinNumber> for u8 {
    fn from(pin: PinNumber) -> u8 {
        pin.0
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PinMode {
    /// Direction bit cleared
    #[default]
    Input,
    /// Direction bit set
    Output,
}

impl PinMode {
    /// Decode a direction bit
    pub const fn from_bit(set: bool) -> Self {
        if set {
            PinMode::Output
        } else {
            PinMode::Input
        }
    }
}

/// Logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PinState {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl PinState {
    /// Decode a register bit
    pub const fn from_bit(set: bool) -> Self {
        if set {
            PinState::High
        } else {
            PinState::Low
        }
    }

    /// Check for logic 1
    pub const fn is_high(self) -> bool {
        matches!(self, PinState::High)
    }

    /// The opposite level
    pub const fn toggled(self) -> Self {
        match self {
            PinState::Low => PinState::High,
            PinState::High => PinState::Low,
        }
    }
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        Self::from_bit(high)
    }
}

impl From<PinState> for bool {
    fn from(state: PinState) -> bool {
        state.is_high()
    }
}

/// Configuration template for one pin
///
/// Supplied by reference to every controller operation. The controller
/// never writes to it; the registers hold the live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    /// Port group holding the pin
    pub port: Port,
    /// Bit position within the port
    pub pin: PinNumber,
    /// Direction applied by `initialize`
    pub mode: PinMode,
    /// Level applied by `initialize`
    pub state: PinState,
}

impl PinDescriptor {
    /// Create a descriptor
    pub const fn new(port: Port, pin: PinNumber, mode: PinMode, state: PinState) -> Self {
        Self {
            port,
            pin,
            mode,
            state,
        }
    }

    /// Create an output pin with an initial level
    pub const fn output(port: Port, pin: PinNumber, state: PinState) -> Self {
        Self::new(port, pin, PinMode::Output, state)
    }

    /// Create an input pin (output latch low)
    pub const fn input(port: Port, pin: PinNumber) -> Self {
        Self::new(port, pin, PinMode::Input, PinState::Low)
    }

    /// Copy of this descriptor with a different initial level
    pub const fn with_state(self, state: PinState) -> Self {
        Self { state, ..self }
    }

    /// Single-bit mask for this pin within its port registers
    pub const fn mask(&self) -> u8 {
        self.pin.mask()
    }

    /// Check whether two descriptors address the same register bit
    pub fn same_bit(&self, other: &PinDescriptor) -> bool {
        self.port == other.port && self.pin == other.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_number_range() {
        for n in 0..=7 {
            let pin = PinNumber::new(n).unwrap();
            assert_eq!(pin.get(), n);
            assert_eq!(pin.mask(), 1 << n);
        }
        assert_eq!(PinNumber::new(8), Err(PinError::InvalidPin(8)));
        assert_eq!(PinNumber::try_from(255), Err(PinError::InvalidPin(255)));
    }

    #[test]
    fn test_pin_constants() {
        assert_eq!(PinNumber::PIN_0.mask(), 0b0000_0001);
        assert_eq!(PinNumber::PIN_7.mask(), 0b1000_0000);
        assert_eq!(u8::from(PinNumber::PIN_3), 3);
    }

    #[test]
    fn test_state_helpers() {
        assert_eq!(PinState::Low.toggled(), PinState::High);
        assert_eq!(PinState::High.toggled(), PinState::Low);
        assert_eq!(PinState::from(true), PinState::High);
        assert!(!bool::from(PinState::Low));
        assert_eq!(PinMode::from_bit(true), PinMode::Output);
        assert_eq!(PinMode::default(), PinMode::Input);
    }

    #[test]
    fn test_descriptor_constructors() {
        let led = PinDescriptor::output(Port::B, PinNumber::PIN_5, PinState::High);
        assert_eq!(led.mode, PinMode::Output);
        assert_eq!(led.state, PinState::High);
        assert_eq!(led.mask(), 0b0010_0000);

        let button = PinDescriptor::input(Port::D, PinNumber::PIN_2);
        assert_eq!(button.mode, PinMode::Input);
        assert_eq!(button.state, PinState::Low);

        let low = led.with_state(PinState::Low);
        assert_eq!(low.state, PinState::Low);
        assert!(low.same_bit(&led));
        assert!(!low.same_bit(&button));
    }
}
