// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Line-oriented reader for the firmware's report stream.

use std::io::{BufRead, ErrorKind};

use anyhow::{Context, Result};
use blinky_common::Report;

use crate::sequence::{Observation, SequenceTracker, Summary};

/// What a received line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Report {
        report: Report,
        observation: Observation,
    },
    /// Anything that is not a report line (boot banners, garbage after reset).
    Noise,
}

/// Classifies received lines and keeps the session totals.
#[derive(Debug, Default)]
pub struct Monitor {
    tracker: SequenceTracker,
    summary: Summary,
    limit: Option<u64>,
}

impl Monitor {
    /// Create a monitor that is done after `limit` reports, or never.
    pub fn new(limit: Option<u64>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn feed(&mut self, line: &str) -> LineOutcome {
        match line.parse::<Report>() {
            Ok(report) => {
                let observation = self.tracker.observe(report.count);
                self.summary.record(observation);
                LineOutcome::Report {
                    report,
                    observation,
                }
            }
            Err(_) => {
                self.summary.noise_lines += 1;
                LineOutcome::Noise
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.limit.is_some_and(|limit| self.summary.reports >= limit)
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Feed complete lines from `reader` into `monitor` until it is done or the
/// stream ends.
///
/// Read timeouts are skipped; a partially received line is kept and
/// completed by the next read. Bytes that are not valid UTF-8 are replaced.
pub fn watch<R, F>(reader: &mut R, monitor: &mut Monitor, mut on_line: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str, &LineOutcome),
{
    let mut pending = Vec::new();

    while !monitor.is_done() {
        match reader.read_until(b'\n', &mut pending) {
            Ok(0) => {
                // Last line may lack its terminator
                feed_pending(&mut pending, monitor, &mut on_line);
                break;
            }
            Ok(_) if pending.ends_with(b"\n") => {
                feed_pending(&mut pending, monitor, &mut on_line);
            }
            // Stream ended mid-line; the next read returns 0
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::TimedOut => {}
            Err(e) => return Err(e).context("Failed to read from serial port"),
        }
    }

    Ok(())
}

fn feed_pending<F>(pending: &mut Vec<u8>, monitor: &mut Monitor, on_line: &mut F)
where
    F: FnMut(&str, &LineOutcome),
{
    let text = String::from_utf8_lossy(pending);
    let line = text.trim_end_matches(['\r', '\n']);
    if !line.is_empty() {
        let outcome = monitor.feed(line);
        on_line(line, &outcome);
    }
    pending.clear();
}
