//! Configuration types
//!
//! Pin descriptors and the parsing of pin names found in configuration
//! files.

pub mod pins;
pub mod types;

pub use pins::parse_pin;
pub use types::*;
