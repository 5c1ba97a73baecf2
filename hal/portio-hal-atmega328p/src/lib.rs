//! ATmega328P-specific HAL for Portio
//!
//! This crate provides the ATmega328P implementation of
//! [`portio_hal::PortRegisters`] for the ATmega328P and pin-compatible
//! parts (ATmega48/88/168), along with:
//!
//! - [`gpio::PinAllocator`] - opt-in bookkeeping of which pin bits are owned
//! - [`delay::Timer1Delay`] - millisecond delay on Timer/Counter1
//!
//! Peripheral ownership comes from the `avr-device` PAC, re-exported as
//! [`pac`]: the port and timer types here are built from the singletons
//! returned by `pac::Peripherals::take()`.
//!
//! # Usage
//!
//! ```ignore
//! let dp = pac::Peripherals::take().unwrap();
//! let mut ctl = PinController::new(Atmega328pPorts::new(dp.PORTB, dp.PORTC, dp.PORTD));
//! ctl.initialize(&LED);
//! ```

#![no_std]

pub mod delay;
pub mod gpio;
pub mod registers;

pub use avr_device::atmega328p as pac;

pub use delay::Timer1Delay;
pub use gpio::PinAllocator;
pub use registers::Atmega328pPorts;

/// Main clock of an Arduino Uno / Nano class board
pub const DEFAULT_CPU_HZ: u32 = 16_000_000;
