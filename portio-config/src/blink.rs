//! blink.toml parsing, validation and pin table generation

use std::fmt::{self, Write as _};

use portio_core::config::parse_pin;
use portio_core::{PinDescriptor, PinMode, PinState};
use serde::Deserialize;

/// Capacity of the firmware's pin set
pub const MAX_BLINK_PINS: usize = 8;

/// Clock assumed when blink.toml does not set `cpu_hz`
pub const DEFAULT_CPU_HZ: u32 = 16_000_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlinkToml {
    #[serde(default = "default_cpu_hz")]
    cpu_hz: u32,
    half_period_ms: u32,
    #[serde(rename = "pin", default)]
    pins: Vec<PinEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PinEntry {
    pin: String,
    mode: PinMode,
    #[serde(default)]
    state: PinState,
}

fn default_cpu_hz() -> u32 {
    DEFAULT_CPU_HZ
}

/// Errors from loading blink.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Not valid TOML, or fields of the wrong shape
    Toml(String),
    /// Parsed, but describes an unusable pin set
    Invalid(Vec<String>),
}

impl ConfigError {
    /// One-line summary for the error box
    pub fn title(&self) -> &'static str {
        match self {
            ConfigError::Toml(_) => "Invalid blink.toml",
            ConfigError::Invalid(_) => "Invalid pin configuration in blink.toml",
        }
    }

    /// Detail lines for the error box
    pub fn details(&self) -> Vec<String> {
        match self {
            ConfigError::Toml(msg) => vec![msg.clone()],
            ConfigError::Invalid(errors) => errors.clone(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.details().join("; "))
    }
}

impl std::error::Error for ConfigError {}

/// Validated blink demo configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkConfig {
    /// CPU clock in Hz
    pub cpu_hz: u32,
    /// Time each phase of the pattern is held
    pub half_period_ms: u32,
    /// Pins in blink.toml order
    pub pins: Vec<PinDescriptor>,
}

impl BlinkConfig {
    /// Parse and validate blink.toml content
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let raw: BlinkToml =
            toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;

        let mut errors = Vec::new();
        if raw.pins.is_empty() {
            errors.push("Missing [[pin]] entries - at least one pin is required".to_string());
        }
        if raw.pins.len() > MAX_BLINK_PINS {
            errors.push(format!(
                "{} pins configured, at most {} supported",
                raw.pins.len(),
                MAX_BLINK_PINS
            ));
        }
        if raw.half_period_ms == 0 {
            errors.push("half_period_ms must be greater than 0".to_string());
        }

        let mut pins: Vec<PinDescriptor> = Vec::new();
        for entry in &raw.pins {
            match parse_pin(&entry.pin) {
                Ok((port, pin)) => {
                    let desc = PinDescriptor::new(port, pin, entry.mode, entry.state);
                    if pins.iter().any(|p| p.same_bit(&desc)) {
                        errors.push(format!("{}: configured more than once", entry.pin));
                    } else {
                        pins.push(desc);
                    }
                }
                Err(e) => errors.push(format!("{}: {}", entry.pin, e)),
            }
        }

        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }
        Ok(Self {
            cpu_hz: raw.cpu_hz,
            half_period_ms: raw.half_period_ms,
            pins,
        })
    }

    /// Non-fatal remarks about the configuration
    pub fn warnings(&self) -> Vec<String> {
        self.pins
            .iter()
            .filter(|p| p.mode == PinMode::Input)
            .map(|p| {
                format!(
                    "P{}{} is an input; blinking it only toggles its output latch",
                    p.port.letter(),
                    p.pin.get()
                )
            })
            .collect()
    }

    /// Render the pin table as Rust source
    ///
    /// Expects `PinDescriptor`, `PinMode`, `PinNumber`, `PinState` and
    /// `Port` to be in scope where the output is included.
    pub fn generate(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// Generated by build.rs from blink.toml");
        let _ = writeln!(out, "pub const MAX_BLINK_PINS: usize = {};", MAX_BLINK_PINS);
        let _ = writeln!(out, "pub const CPU_HZ: u32 = {};", self.cpu_hz);
        let _ = writeln!(out, "pub const HALF_PERIOD_MS: u32 = {};", self.half_period_ms);
        let _ = writeln!(
            out,
            "pub const BLINK_PINS: [PinDescriptor; {}] = [",
            self.pins.len()
        );
        for pin in &self.pins {
            let _ = writeln!(
                out,
                "    PinDescriptor::new(Port::{:?}, PinNumber::PIN_{}, PinMode::{:?}, PinState::{:?}),",
                pin.port,
                pin.pin.get(),
                pin.mode,
                pin.state
            );
        }
        let _ = writeln!(out, "];");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portio_core::{PinNumber, Port};

    const DEMO: &str = r#"
        half_period_ms = 500

        [[pin]]
        pin = "PB0"
        mode = "output"
        state = "low"

        [[pin]]
        pin = "PC1"
        mode = "output"
        state = "high"

        [[pin]]
        pin = "PD2"
        mode = "output"
    "#;

    #[test]
    fn test_parse_demo() {
        let config = BlinkConfig::from_toml(DEMO).unwrap();
        assert_eq!(config.cpu_hz, DEFAULT_CPU_HZ);
        assert_eq!(config.half_period_ms, 500);
        assert_eq!(
            config.pins,
            vec![
                PinDescriptor::output(Port::B, PinNumber::PIN_0, PinState::Low),
                PinDescriptor::output(Port::C, PinNumber::PIN_1, PinState::High),
                PinDescriptor::output(Port::D, PinNumber::PIN_2, PinState::Low),
            ]
        );
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_generate() {
        let source = BlinkConfig::from_toml(DEMO).unwrap().generate();
        assert!(source.contains("pub const HALF_PERIOD_MS: u32 = 500;"));
        assert!(source.contains("pub const BLINK_PINS: [PinDescriptor; 3] = ["));
        assert!(source.contains(
            "PinDescriptor::new(Port::C, PinNumber::PIN_1, PinMode::Output, PinState::High),"
        ));
    }

    #[test]
    fn test_collects_every_pin_error() {
        let input = r#"
            half_period_ms = 0
            [[pin]]
            pin = "PB8"
            mode = "output"
            [[pin]]
            pin = "PA1"
            mode = "output"
            [[pin]]
            pin = "PD3"
            mode = "output"
            [[pin]]
            pin = "pd3"
            mode = "input"
        "#;
        let err = BlinkConfig::from_toml(input).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid(vec![
                "half_period_ms must be greater than 0".to_string(),
                "PB8: pin number 8 is outside 0..=7".to_string(),
                "PA1: unknown port 'A'".to_string(),
                "pd3: configured more than once".to_string(),
            ])
        );
        assert_eq!(err.title(), "Invalid pin configuration in blink.toml");
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        let err = BlinkConfig::from_toml("half_period_ms = 100").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref e) if e[0].starts_with("Missing [[pin]]")));

        let mut input = String::from("half_period_ms = 100\n");
        for n in 0..=MAX_BLINK_PINS {
            let _ = write!(input, "[[pin]]\npin = \"P{}{}\"\nmode = \"output\"\n", ['B', 'C'][n / 8], n % 8);
        }
        let err = BlinkConfig::from_toml(&input).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid(vec!["9 pins configured, at most 8 supported".to_string()])
        );
    }

    #[test]
    fn test_toml_errors() {
        let err = BlinkConfig::from_toml("half_period_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        let err = BlinkConfig::from_toml("half_period_ms = 5\nblink_rate = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_input_pin_warns() {
        let input = r#"
            half_period_ms = 250
            [[pin]]
            pin = "PD7"
            mode = "input"
        "#;
        let config = BlinkConfig::from_toml(input).unwrap();
        assert_eq!(
            config.warnings(),
            vec!["PD7 is an input; blinking it only toggles its output latch".to_string()]
        );
    }
}
