// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Compile-time settings for the blink reporter.

/// Serial baud rate used for the report stream.
pub const BAUD_RATE: u32 = 115_200;

/// Duration of each LED phase in milliseconds (1 Hz, 50% duty).
pub const HALF_PERIOD_MS: u32 = 500;

/// Electrical level that lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// LED is lit when the pin is driven high.
    ActiveHigh,
    /// LED is lit when the pin is driven low (current-sinking wiring).
    ActiveLow,
}

/// Waveform settings for [`crate::BlinkReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub half_period_ms: u32,
    pub polarity: Polarity,
}

impl BlinkConfig {
    pub const DEFAULT: Self = Self {
        half_period_ms: HALF_PERIOD_MS,
        polarity: Polarity::ActiveHigh,
    };

    /// Full cycle length in milliseconds.
    pub const fn period_ms(&self) -> u32 {
        self.half_period_ms.saturating_mul(2)
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
