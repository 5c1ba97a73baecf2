//! Pin ownership tracking
//!
//! The pin controller lets any caller touch any bit. Applications that
//! want to catch two parts of the program configuring the same pin can
//! route their descriptors through a [`PinAllocator`] first.

use portio_core::{PinDescriptor, PinError, Port};

/// Pin allocator to track pin usage
pub struct PinAllocator {
    /// Bitmask of allocated pins, one byte per port
    allocated: [u8; Port::COUNT],
}

impl Default for PinAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PinAllocator {
    /// Create an allocator with every pin free
    pub const fn new() -> Self {
        Self {
            allocated: [0; Port::COUNT],
        }
    }

    /// Claim the pin a descriptor addresses
    pub fn claim(&mut self, pin: &PinDescriptor) -> Result<(), PinError> {
        let bits = &mut self.allocated[pin.port.index()];
        if *bits & pin.mask() != 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("P{}{} claimed twice", pin.port, pin.pin);
            return Err(PinError::AlreadyClaimed);
        }
        *bits |= pin.mask();
        Ok(())
    }

    /// Claim every pin in a list, or none of them
    pub fn claim_all(&mut self, pins: &[PinDescriptor]) -> Result<(), PinError> {
        let saved = self.allocated;
        for pin in pins {
            if let Err(e) = self.claim(pin) {
                self.allocated = saved;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Release a pin
    pub fn release(&mut self, pin: &PinDescriptor) {
        self.allocated[pin.port.index()] &= !pin.mask();
    }

    /// Check if a pin is claimed
    pub fn is_claimed(&self, pin: &PinDescriptor) -> bool {
        self.allocated[pin.port.index()] & pin.mask() != 0
    }

    /// Get the number of claimed pins
    pub fn claimed_count(&self) -> usize {
        self.allocated.iter().map(|b| b.count_ones() as usize).sum()
    }
}
