//! Error types

use core::fmt;

/// Errors from building or claiming a pin
///
/// Register operations themselves cannot fail: a [`PinDescriptor`] can
/// only hold a valid port and a pin number in 0..=7, so every check
/// happens when the descriptor is built.
///
/// [`PinDescriptor`]: crate::config::PinDescriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number outside 0..=7
    InvalidPin(u8),
    /// Port letter is not one of B, C, D
    InvalidPort(char),
    /// Pin name is not of the form `P<port><pin>`
    Malformed,
    /// The pin's bit is already owned by someone else
    AlreadyClaimed,
    /// More pins than a fixed-capacity set can hold
    TooManyPins,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::InvalidPin(n) => write!(f, "pin number {} is outside 0..=7", n),
            PinError::InvalidPort(c) => write!(f, "unknown port '{}'", c),
            PinError::Malformed => f.write_str("pin name must look like PB0"),
            PinError::AlreadyClaimed => f.write_str("pin is already claimed"),
            PinError::TooManyPins => f.write_str("too many pins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    fn render(err: PinError) -> heapless::String<64> {
        let mut out = heapless::String::new();
        write!(out, "{}", err).unwrap();
        out
    }

    #[test]
    fn test_display() {
        assert_eq!(render(PinError::InvalidPin(9)), "pin number 9 is outside 0..=7");
        assert_eq!(render(PinError::InvalidPort('X')), "unknown port 'X'");
        assert_eq!(render(PinError::Malformed), "pin name must look like PB0");
    }
}
