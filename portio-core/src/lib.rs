//! Board-agnostic pin controller for AVR port I/O
//!
//! This crate contains the whole of the driver logic:
//!
//! - Pin descriptor types (port, pin number, mode, state)
//! - The [`PinController`], which turns a descriptor into single-bit
//!   read-modify-write cycles on a port's register triple
//! - A simulated register file for host-side testing
//! - Pin name parsing for configuration files
//!
//! Register storage is abstracted by [`portio_hal::PortRegisters`]; the
//! memory-mapped implementation lives in `portio-hal-atmega328p`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod controller;
pub mod error;
pub mod sim;

pub use config::{PinDescriptor, PinMode, PinNumber, PinState};
pub use controller::PinController;
pub use error::PinError;
pub use portio_hal::{Port, PortRegisters, Register};
