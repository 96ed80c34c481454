// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and the blink reporter loop for the blinky firmware.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode, generic over `embedded-hal` traits
//! - `std` feature: Enables `std::error::Error` impls for host tools
//! - `embedded` feature: Enables Raspberry Pi Pico board bring-up (rp2040-hal)

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod counter;
pub mod report;
pub mod reporter;

// Board bring-up for the firmware (requires embedded feature)
#[cfg(feature = "embedded")]
pub mod board;

// Re-export commonly used types
pub use config::{BlinkConfig, Polarity, BAUD_RATE, HALF_PERIOD_MS};
pub use report::{ParseReportError, Report, REPORT_PREFIX};
pub use reporter::{BlinkReporter, CycleCounter, Phase};

#[cfg(feature = "embedded")]
pub use board::{init_board, timer_ticks, Board, BoardError};
