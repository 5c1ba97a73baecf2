//! Pin name parsing
//!
//! Configuration files name pins the way the datasheet does: `PB0`,
//! `PC1`, `PD7`.

use portio_hal::Port;

use super::types::PinNumber;
use crate::error::PinError;

/// Parse a pin name from config
///
/// Supports formats:
/// - "PB0" -> (Port B, pin 0)
/// - "pd7" -> (Port D, pin 7), case-insensitive
///
/// Surrounding whitespace is ignored.
pub fn parse_pin(s: &str) -> Result<(Port, PinNumber), PinError> {
    let s = s.trim();
    let mut chars = s.chars();

    match chars.next() {
        Some('P') | Some('p') => {}
        _ => return Err(PinError::Malformed),
    }

    let letter = chars.next().ok_or(PinError::Malformed)?;
    if !letter.is_ascii_alphabetic() {
        return Err(PinError::Malformed);
    }
    let port = Port::from_letter(letter).ok_or(PinError::InvalidPort(letter.to_ascii_uppercase()))?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinError::Malformed);
    }
    let n: u8 = digits.parse().map_err(|_| PinError::Malformed)?;

    Ok((port, PinNumber::new(n)?))
}
