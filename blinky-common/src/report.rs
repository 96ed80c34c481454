// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The `Blinky nr. <N>` report line.
//!
//! The firmware renders one report per cycle with [`Report::to_line`]; host
//! tools parse received lines back with [`str::parse`].

use core::fmt::{self, Write};
use core::str::FromStr;

/// Text preceding the counter value on every report line.
pub const REPORT_PREFIX: &str = "Blinky nr. ";

/// Line terminator written after each report.
pub const LINE_TERMINATOR: &str = "\n";

/// Capacity of a rendered line: prefix (11) + `u32::MAX` digits (10) + terminator.
pub const MAX_LINE_LEN: usize = 24;

/// One rendered report line, terminator included.
pub type ReportLine = heapless::String<MAX_LINE_LEN>;

/// A single cycle report carrying the counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub count: u32,
}

impl Report {
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Render the report followed by [`LINE_TERMINATOR`].
    pub fn to_line(&self) -> ReportLine {
        let mut line = ReportLine::new();
        // Cannot overflow: MAX_LINE_LEN covers the longest possible report.
        let _ = write!(line, "{}{}", self, LINE_TERMINATOR);
        line
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", REPORT_PREFIX, self.count)
    }
}

/// Reasons a received line is not a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseReportError {
    /// The line does not start with [`REPORT_PREFIX`].
    MissingPrefix,
    /// The text after the prefix is not a canonical decimal `u32`.
    InvalidNumber,
}

impl fmt::Display for ParseReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "line does not start with {:?}", REPORT_PREFIX),
            Self::InvalidNumber => f.write_str("counter is not a canonical decimal u32"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseReportError {}

impl FromStr for Report {
    type Err = ParseReportError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let digits = line
            .trim_start()
            .trim_end_matches(['\r', '\n'])
            .strip_prefix(REPORT_PREFIX)
            .ok_or(ParseReportError::MissingPrefix)?;

        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return Err(ParseReportError::InvalidNumber);
        }

        digits
            .parse::<u32>()
            .map(Report::new)
            .map_err(|_| ParseReportError::InvalidNumber)
    }
}
