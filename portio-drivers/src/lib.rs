//! Drivers built on the pin controller
//!
//! - [`pin::DescriptorPin`] - a descriptor bound to a controller, usable
//!   through the `portio-hal` and `embedded-hal` digital traits
//! - [`blink::Blinker`] - alternates a set of output pins between their
//!   configured level and its inverse

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod pin;

pub use blink::Blinker;
pub use pin::DescriptorPin;
