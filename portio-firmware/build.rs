//! Build script for portio-firmware
//!
//! - Validates blink.toml at compile time
//! - Generates the pin table the firmware blinks (`$OUT_DIR/blink_config.rs`)

use std::env;
use std::fs;
use std::path::PathBuf;

use portio_config::{error_box, BlinkConfig};

fn main() {
    println!("cargo:rerun-if-changed=blink.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let content = match fs::read_to_string("blink.toml") {
        Ok(content) => content,
        Err(e) => panic!("{}", error_box("Failed to read blink.toml", &[e.to_string()])),
    };

    let config = match BlinkConfig::from_toml(&content) {
        Ok(config) => config,
        Err(e) => panic!("{}", error_box(e.title(), &e.details())),
    };

    for warning in config.warnings() {
        println!("cargo:warning={}", warning);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    if let Err(e) = fs::write(out_dir.join("blink_config.rs"), config.generate()) {
        panic!("{}", error_box("Failed to write blink_config.rs", &[e.to_string()]));
    }
}
