// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Blink reporter: toggles the status LED and logs one report per cycle.

use core::fmt::Write;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{BlinkConfig, Polarity};
use crate::report::Report;

/// LED phase of the blink waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// LED dark.
    Inactive,
    /// LED lit.
    Active,
}

/// Number of completed cycles.
///
/// Wraps to 0 after `u32::MAX`, so the value is never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleCounter(u32);

impl CycleCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Start counting from `value` instead of 0.
    pub const fn starting_at(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Return the current value and advance by one.
    pub fn advance(&mut self) -> u32 {
        let current = self.0;
        self.0 = current.wrapping_add(1);
        current
    }
}

/// Drives an LED through a fixed on/off waveform and writes a
/// `Blinky nr. <N>` line to the serial sink after every cycle.
///
/// The reporter owns its hardware. Errors from the pin or the serial sink
/// are discarded: the cycle always runs to completion.
pub struct BlinkReporter<L, D, S> {
    led: L,
    delay: D,
    serial: S,
    config: BlinkConfig,
    counter: CycleCounter,
    phase: Phase,
}

impl<L, D, S> BlinkReporter<L, D, S>
where
    L: OutputPin,
    D: DelayNs,
    S: Write,
{
    /// Create a reporter with the default 500 ms / active-high waveform.
    pub fn new(led: L, delay: D, serial: S) -> Self {
        Self::with_config(led, delay, serial, BlinkConfig::DEFAULT)
    }

    pub fn with_config(led: L, delay: D, serial: S, config: BlinkConfig) -> Self {
        Self::with_counter(led, delay, serial, config, CycleCounter::new())
    }

    pub fn with_counter(
        led: L,
        delay: D,
        serial: S,
        config: BlinkConfig,
        counter: CycleCounter,
    ) -> Self {
        Self {
            led,
            delay,
            serial,
            config,
            counter,
            phase: Phase::Inactive,
        }
    }

    /// Run one full cycle and return the report that was written.
    ///
    /// Order: inactive, wait, active, wait, report. Blocks for one full
    /// period.
    pub fn cycle(&mut self) -> Report {
        self.set_phase(Phase::Inactive);
        self.delay.delay_ms(self.config.half_period_ms);
        self.set_phase(Phase::Active);
        self.delay.delay_ms(self.config.half_period_ms);

        let report = Report::new(self.counter.advance());
        self.serial.write_str(&report.to_line()).ok();
        report
    }

    /// Value the next report will carry.
    pub fn counter(&self) -> u32 {
        self.counter.value()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Give the hardware back.
    pub fn release(self) -> (L, D, S) {
        (self.led, self.delay, self.serial)
    }

    fn set_phase(&mut self, phase: Phase) {
        let high = match (phase, self.config.polarity) {
            (Phase::Active, Polarity::ActiveHigh) | (Phase::Inactive, Polarity::ActiveLow) => true,
            (Phase::Inactive, Polarity::ActiveHigh) | (Phase::Active, Polarity::ActiveLow) => false,
        };

        if high {
            self.led.set_high().ok();
        } else {
            self.led.set_low().ok();
        }

        #[cfg(feature = "defmt")]
        {
            if phase != self.phase {
                defmt::trace!("LED: {:?} -> {:?}", self.phase, phase);
            }
        }
        self.phase = phase;
    }
}
