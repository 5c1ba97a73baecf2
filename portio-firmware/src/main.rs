//! Portio blink demo
//!
//! Initializes the pins listed in blink.toml (by default PB0, PC1 and PD2,
//! one on each port) and alternates their levels on a Timer1-paced
//! cadence.
//!
//! Build from this directory with a nightly toolchain; `.cargo/config.toml`
//! selects the AVR target and `cargo run` flashes an Uno via ravedude.

#![no_std]
#![no_main]

use embedded_hal::delay::DelayNs;
use panic_halt as _;

use portio_core::PinController;
use portio_drivers::Blinker;
use portio_hal_atmega328p::{pac, Atmega328pPorts, PinAllocator, Timer1Delay};

mod config {
    use portio_core::{PinDescriptor, PinMode, PinNumber, PinState, Port};

    include!(concat!(env!("OUT_DIR"), "/blink_config.rs"));
}

use config::{BLINK_PINS, CPU_HZ, HALF_PERIOD_MS, MAX_BLINK_PINS};

/// Main entry point
#[avr_device::entry]
fn main() -> ! {
    let Some(dp) = pac::Peripherals::take() else {
        halt();
    };
    let ports = Atmega328pPorts::new(dp.PORTB, dp.PORTC, dp.PORTD);
    let Ok(mut delay) = Timer1Delay::new(dp.TC1, CPU_HZ) else {
        halt();
    };

    let mut allocator = PinAllocator::new();
    if allocator.claim_all(&BLINK_PINS).is_err() {
        halt();
    }

    let Ok(mut blinker) = Blinker::<MAX_BLINK_PINS>::new(&BLINK_PINS) else {
        halt();
    };

    let mut ctl = PinController::new(ports);

    // The controller does not mask interrupts; hold them off while the
    // port registers are being read-modify-written.
    avr_device::interrupt::free(|_| blinker.init(&mut ctl));

    #[cfg(feature = "defmt")]
    defmt::info!("blinking {} pins every {} ms", BLINK_PINS.len(), HALF_PERIOD_MS);

    // Not Blinker::cycle: only the register writes belong in the critical
    // section, the half-period wait must run with interrupts enabled.
    loop {
        avr_device::interrupt::free(|_| blinker.step(&mut ctl));
        delay.delay_ms(HALF_PERIOD_MS);
    }
}

/// Park the CPU after an unrecoverable setup error
fn halt() -> ! {
    loop {
        avr_device::asm::sleep();
    }
}
