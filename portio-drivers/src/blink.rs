//! Blink pattern driver
//!
//! Alternates a set of pins between the inverse of their configured
//! level and the configured level itself:
//!
//! ```text
//! init:    PB0 LOW   PC1 HIGH  PD2 LOW
//! phase 0: PB0 HIGH  PC1 LOW   PD2 HIGH
//! phase 1: PB0 LOW   PC1 HIGH  PD2 LOW
//! phase 0: ...
//! ```

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use portio_core::{PinController, PinDescriptor, PinError, PortRegisters};

/// Blinks up to `N` pins in lockstep
#[derive(Debug, Clone)]
pub struct Blinker<const N: usize> {
    pins: Vec<PinDescriptor, N>,
    /// true once the pins are showing their inverse level
    inverted: bool,
}

impl<const N: usize> Blinker<N> {
    /// Create a blinker over a set of distinct pins
    pub fn new(pins: &[PinDescriptor]) -> Result<Self, PinError> {
        let mut set: Vec<PinDescriptor, N> = Vec::new();
        for pin in pins {
            if set.iter().any(|p| p.same_bit(pin)) {
                return Err(PinError::AlreadyClaimed);
            }
            set.push(*pin).map_err(|_| PinError::TooManyPins)?;
        }
        Ok(Self {
            pins: set,
            inverted: false,
        })
    }

    /// The pins being driven
    pub fn pins(&self) -> &[PinDescriptor] {
        &self.pins
    }

    /// Apply every pin's descriptor and restart the pattern
    pub fn init<R: PortRegisters>(&mut self, ctl: &mut PinController<R>) {
        for pin in &self.pins {
            ctl.initialize(pin);
        }
        self.inverted = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("blinker: {} pins initialized", self.pins.len());
    }

    /// Advance the pattern by one phase
    pub fn step<R: PortRegisters>(&mut self, ctl: &mut PinController<R>) {
        self.inverted = !self.inverted;
        for pin in &self.pins {
            let state = if self.inverted {
                pin.state.toggled()
            } else {
                pin.state
            };
            ctl.write(pin, state);
        }
    }

    /// Advance one phase, then hold it for `hold_ms`
    ///
    /// Runs the register writes and the wait back to back. Callers that
    /// mask interrupts around the port writes should call [`step`] inside
    /// the critical section and delay outside it instead, as the firmware
    /// does; holding interrupts off for the whole period would stall them.
    ///
    /// [`step`]: Self::step
    pub fn cycle<R: PortRegisters, D: DelayNs>(
        &mut self,
        ctl: &mut PinController<R>,
        delay: &mut D,
        hold_ms: u32,
    ) {
        self.step(ctl);
        delay.delay_ms(hold_ms);
    }
}
