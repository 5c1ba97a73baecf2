//! Descriptor-bound pin
//!
//! Lets code written against `embedded-hal` (or the `portio-hal` traits)
//! drive a pin described by a [`PinDescriptor`].

use core::convert::Infallible;

use embedded_hal::digital;
use portio_core::{PinController, PinDescriptor, PinMode, PinState, PortRegisters};

/// A pin descriptor bound to a controller
pub struct DescriptorPin<'a, R> {
    controller: &'a mut PinController<R>,
    pin: PinDescriptor,
}

impl<'a, R: PortRegisters> DescriptorPin<'a, R> {
    /// Bind a descriptor without touching the registers
    pub fn new(controller: &'a mut PinController<R>, pin: PinDescriptor) -> Self {
        Self { controller, pin }
    }

    /// Bind a descriptor and apply its mode and initial level
    pub fn configure(controller: &'a mut PinController<R>, pin: PinDescriptor) -> Self {
        controller.initialize(&pin);
        Self::new(controller, pin)
    }

    /// The bound descriptor
    pub fn descriptor(&self) -> &PinDescriptor {
        &self.pin
    }

    /// Current direction in the direction register
    pub fn mode(&self) -> PinMode {
        self.controller.mode(&self.pin)
    }

    fn write(&mut self, state: PinState) {
        self.controller.write(&self.pin, state);
    }
}

impl<R: PortRegisters> portio_hal::OutputPin for DescriptorPin<'_, R> {
    fn set_high(&mut self) {
        self.write(PinState::High);
    }

    fn set_low(&mut self) {
        self.write(PinState::Low);
    }

    fn toggle(&mut self) {
        self.controller.toggle(&self.pin);
    }

    fn is_set_high(&self) -> bool {
        self.controller.output_state(&self.pin).is_high()
    }
}

impl<R: PortRegisters> portio_hal::InputPin for DescriptorPin<'_, R> {
    fn is_high(&self) -> bool {
        self.controller.read(&self.pin) != 0
    }
}

impl<R> digital::ErrorType for DescriptorPin<'_, R> {
    type Error = Infallible;
}

impl<R: PortRegisters> digital::OutputPin for DescriptorPin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High);
        Ok(())
    }

    fn set_state(&mut self, state: digital::PinState) -> Result<(), Self::Error> {
        self.write(PinState::from_bit(state == digital::PinState::High));
        Ok(())
    }
}

impl<R: PortRegisters> digital::StatefulOutputPin for DescriptorPin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.controller.output_state(&self.pin).is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.controller.output_state(&self.pin).is_high())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.controller.toggle(&self.pin);
        Ok(())
    }
}

impl<R: PortRegisters> digital::InputPin for DescriptorPin<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.controller.read(&self.pin) != 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.controller.read(&self.pin) == 0)
    }
}
