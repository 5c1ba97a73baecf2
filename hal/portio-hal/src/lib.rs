//! Portio Hardware Abstraction Layer
//!
//! This crate defines the register vocabulary and hardware abstraction
//! traits shared by the port I/O driver and the chip-specific HALs. The
//! driver logic in `portio-core` is written once against
//! [`PortRegisters`], so the same code runs against memory-mapped
//! hardware on the device and against a simulated register file on the
//! host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (portio-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  portio-core (pin controller)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  portio-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ portio-hal-   │       │ SimRegister-  │
//! │  atmega328p   │       │ File (host)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::PortRegisters`] - Access to the DDRx / PORTx / PINx triples
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod register;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, IoPin, OutputPin};
pub use register::{Port, PortRegisters, Register};
