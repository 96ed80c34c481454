// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Counter continuity checks for the report stream.

use std::fmt;

/// How a report relates to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First report seen since the monitor started.
    First,
    /// Previous value plus one.
    InOrder,
    /// `u32::MAX` followed by 0.
    Wrapped,
    /// Same value as the previous report.
    Repeated,
    /// Counter jumped forward; `missed` reports were lost.
    Skipped { missed: u32 },
    /// Counter went back to 0: the board was reset.
    Restarted,
    /// Counter went backwards to something other than 0.
    OutOfOrder { expected: u32 },
}

impl Observation {
    /// True when the report continues the sequence without a gap.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::First | Self::InOrder | Self::Wrapped)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first report"),
            Self::InOrder => f.write_str("in order"),
            Self::Wrapped => f.write_str("counter wrapped"),
            Self::Repeated => f.write_str("repeated"),
            Self::Skipped { missed } => write!(f, "skipped {} report(s)", missed),
            Self::Restarted => f.write_str("board restarted"),
            Self::OutOfOrder { expected } => write!(f, "out of order, expected {}", expected),
        }
    }
}

/// Remembers the last counter value and classifies the next one.
#[derive(Debug, Default)]
pub struct SequenceTracker {
    last: Option<u32>,
}

impl SequenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, count: u32) -> Observation {
        let observation = match self.last {
            None => Observation::First,
            Some(last) => {
                let expected = last.wrapping_add(1);
                if count == expected {
                    if count == 0 {
                        Observation::Wrapped
                    } else {
                        Observation::InOrder
                    }
                } else if count == last {
                    Observation::Repeated
                } else {
                    // Distance forward from the expected value, through the wrap
                    let gap = count.wrapping_sub(expected);
                    if gap < u32::MAX / 2 {
                        Observation::Skipped { missed: gap }
                    } else if count == 0 {
                        Observation::Restarted
                    } else {
                        Observation::OutOfOrder { expected }
                    }
                }
            }
        };
        self.last = Some(count);
        observation
    }
}

/// Running totals over a monitoring session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub reports: u64,
    pub noise_lines: u64,
    pub missed: u64,
    pub repeats: u64,
    pub restarts: u64,
    pub out_of_order: u64,
    pub wraps: u64,
}

impl Summary {
    pub fn record(&mut self, observation: Observation) {
        self.reports += 1;
        match observation {
            Observation::First | Observation::InOrder => {}
            Observation::Wrapped => self.wraps += 1,
            Observation::Repeated => self.repeats += 1,
            Observation::Skipped { missed } => self.missed += u64::from(missed),
            Observation::Restarted => self.restarts += 1,
            Observation::OutOfOrder { .. } => self.out_of_order += 1,
        }
    }

    /// True when every report continued the sequence.
    pub fn is_clean(&self) -> bool {
        self.missed == 0 && self.repeats == 0 && self.restarts == 0 && self.out_of_order == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe_all(counts: &[u32]) -> Vec<Observation> {
        let mut tracker = SequenceTracker::new();
        counts.iter().map(|&c| tracker.observe(c)).collect()
    }

    #[test]
    fn test_in_order_sequence() {
        assert_eq!(
            observe_all(&[0, 1, 2]),
            vec![Observation::First, Observation::InOrder, Observation::InOrder]
        );
    }

    #[test]
    fn test_first_report_can_start_anywhere() {
        assert_eq!(observe_all(&[41, 42])[0], Observation::First);
    }

    #[test]
    fn test_gap_reports_missed_count() {
        assert_eq!(
            observe_all(&[3, 7]),
            vec![Observation::First, Observation::Skipped { missed: 3 }]
        );
    }

    #[test]
    fn test_reset_to_zero_is_restart() {
        assert_eq!(observe_all(&[10, 0])[1], Observation::Restarted);
    }

    #[test]
    fn test_wrap_after_max() {
        assert_eq!(observe_all(&[u32::MAX, 0])[1], Observation::Wrapped);
        assert!(Observation::Wrapped.is_continuous());
    }

    #[test]
    fn test_gap_across_wrap() {
        assert_eq!(
            observe_all(&[u32::MAX - 1, 1])[1],
            Observation::Skipped { missed: 2 }
        );
        assert_eq!(
            observe_all(&[u32::MAX - 1, 0])[1],
            Observation::Skipped { missed: 1 }
        );
    }

    #[test]
    fn test_repeat_and_backwards() {
        assert_eq!(observe_all(&[5, 5])[1], Observation::Repeated);
        assert_eq!(
            observe_all(&[5, 2])[1],
            Observation::OutOfOrder { expected: 6 }
        );
    }

    #[test]
    fn test_summary_totals() {
        let mut tracker = SequenceTracker::new();
        let mut summary = Summary::default();
        for count in [0, 1, 4, 4, 0, 1] {
            summary.record(tracker.observe(count));
        }

        assert_eq!(summary.reports, 6);
        assert_eq!(summary.missed, 2);
        assert_eq!(summary.repeats, 1);
        assert_eq!(summary.restarts, 1);
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_clean_summary() {
        let mut tracker = SequenceTracker::new();
        let mut summary = Summary::default();
        for count in 0..5 {
            summary.record(tracker.observe(count));
        }
        assert!(summary.is_clean());
    }
}
