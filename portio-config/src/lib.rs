//! Blink demo configuration
//!
//! Loads and validates `blink.toml` on the host and renders the pin table
//! that `portio-firmware` compiles in. Used from the firmware's build
//! script, so configuration mistakes fail the build instead of the board.
//!
//! ```toml
//! half_period_ms = 500
//!
//! [[pin]]
//! pin = "PB0"
//! mode = "output"
//! state = "low"
//! ```

pub mod blink;
pub mod report;

pub use blink::{BlinkConfig, ConfigError, MAX_BLINK_PINS};
pub use report::error_box;
