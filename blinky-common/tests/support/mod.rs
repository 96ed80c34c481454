// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Recording fakes for the reporter's pin, delay and serial sink.
//!
//! All three share one [`Timeline`], so tests can check the order and the
//! simulated time of every pin level and every line written.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pin driven high (`true`) or low (`false`).
    Level(bool),
    Line(String),
}

#[derive(Debug, Default)]
pub struct Timeline {
    pub now_ns: u64,
    pub events: Vec<(u64, Event)>,
}

impl Timeline {
    pub fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    fn record(&mut self, event: Event) {
        let at = self.now_ms();
        self.events.push((at, event));
    }
}

pub type SharedTimeline = Rc<RefCell<Timeline>>;

pub fn timeline() -> SharedTimeline {
    Rc::new(RefCell::new(Timeline::default()))
}

/// Pin levels with their timestamps in milliseconds.
pub fn levels(timeline: &SharedTimeline) -> Vec<(u64, bool)> {
    timeline
        .borrow()
        .events
        .iter()
        .filter_map(|(at, e)| match e {
            Event::Level(high) => Some((*at, *high)),
            Event::Line(_) => None,
        })
        .collect()
}

/// Lines written with their timestamps in milliseconds.
pub fn lines(timeline: &SharedTimeline) -> Vec<(u64, String)> {
    timeline
        .borrow()
        .events
        .iter()
        .filter_map(|(at, e)| match e {
            Event::Line(line) => Some((*at, line.clone())),
            Event::Level(_) => None,
        })
        .collect()
}

pub struct FakePin(pub SharedTimeline);

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().record(Event::Level(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().record(Event::Level(true));
        Ok(())
    }
}

pub struct FakeDelay(pub SharedTimeline);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().now_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().now_ns += u64::from(ms) * 1_000_000;
    }
}

pub struct FakeSerial(pub SharedTimeline);

impl fmt::Write for FakeSerial {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.borrow_mut().record(Event::Line(s.to_string()));
        Ok(())
    }
}

/// Pin whose every write fails without touching the timeline.
pub struct BrokenPin;

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

/// Serial sink that rejects every write, like a disconnected cable.
pub struct BrokenSerial;

impl fmt::Write for BrokenSerial {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}
