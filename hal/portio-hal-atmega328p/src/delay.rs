//! Timer/Counter1 millisecond delay
//!
//! Runs Timer1 in CTC mode (WGM = 4, TOP = OCR1A) with a /64 prescaler so
//! that the compare-match flag OCF1A fires once per millisecond. Each
//! millisecond of delay waits for that flag and clears it. No interrupt is
//! used.

use embedded_hal::delay::DelayNs;

use crate::pac::TC1;

/// Timer1 prescaler selected in [`Timer1Delay::new`]
pub const PRESCALER: u32 = 64;

/// Compare value giving one match per millisecond
///
/// Returns `None` if the clock cannot be divided down to 1 kHz with the
/// /64 prescaler and a 16-bit counter.
pub const fn ticks_per_ms(cpu_hz: u32) -> Option<u16> {
    let ticks = cpu_hz / PRESCALER / 1000;
    if ticks == 0 || ticks > u16::MAX as u32 + 1 {
        None
    } else {
        Some((ticks - 1) as u16)
    }
}

/// Round a nanosecond delay up to whole milliseconds
pub const fn ns_to_ms(ns: u32) -> u32 {
    ns.div_ceil(1_000_000)
}

/// Blocking delay on Timer/Counter1
///
/// Resolution is one millisecond; shorter requests round up.
pub struct Timer1Delay {
    tc1: TC1,
}

impl Timer1Delay {
    /// Configure Timer1 for a 1 ms period
    ///
    /// Hands the timer back if `cpu_hz` is out of range for the prescaler.
    pub fn new(tc1: TC1, cpu_hz: u32) -> Result<Self, TC1> {
        let Some(top) = ticks_per_ms(cpu_hz) else {
            return Err(tc1);
        };

        tc1.tccr1b.reset();
        tc1.tccr1a.write(|w| w.wgm1().bits(0b00));
        // SAFETY: any 16-bit value is a valid compare / count value
        tc1.ocr1a.write(|w| unsafe { w.bits(top) });
        tc1.tcnt1.write(|w| unsafe { w.bits(0) });
        tc1.tifr1.write(|w| w.ocf1a().set_bit());
        tc1.tccr1b
            .write(|w| w.wgm1().bits(0b01).cs1().prescale_64());

        Ok(Self { tc1 })
    }

    /// Stop the timer and give it back
    pub fn release(self) -> TC1 {
        self.tc1.tccr1b.reset();
        self.tc1
    }

    fn wait_one_ms(&mut self) {
        while self.tc1.tifr1.read().ocf1a().bit_is_clear() {}
        // Flag clears by writing a one
        self.tc1.tifr1.write(|w| w.ocf1a().set_bit());
    }
}

impl DelayNs for Timer1Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns_to_ms(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        if ms == 0 {
            return;
        }
        // Start from a fresh period so the first millisecond is whole
        // SAFETY: zero is a valid count
        self.tc1.tcnt1.write(|w| unsafe { w.bits(0) });
        self.tc1.tifr1.write(|w| w.ocf1a().set_bit());
        for _ in 0..ms {
            self.wait_one_ms();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_per_ms() {
        assert_eq!(ticks_per_ms(16_000_000), Some(249));
        assert_eq!(ticks_per_ms(8_000_000), Some(124));
        assert_eq!(ticks_per_ms(1_000_000), Some(14));
        // Too slow to reach 1 kHz after /64
        assert_eq!(ticks_per_ms(32_000), None);
    }

    #[test]
    fn test_ns_to_ms_rounds_up() {
        assert_eq!(ns_to_ms(0), 0);
        assert_eq!(ns_to_ms(1), 1);
        assert_eq!(ns_to_ms(1_000_000), 1);
        assert_eq!(ns_to_ms(1_000_001), 2);
        assert_eq!(ns_to_ms(u32::MAX), 4295);
    }
}
