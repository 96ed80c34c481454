// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Raspberry Pi Pico bring-up: clocks, status LED and UART0.

use core::fmt;

use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::fugit::RateExtU32;
use rp2040_hal::gpio::bank0::{Gpio0, Gpio1, Gpio25};
use rp2040_hal::gpio::{FunctionSioOutput, FunctionUart, Pin, Pins, PullDown};
use rp2040_hal::uart::{DataBits, Enabled, StopBits, UartConfig, UartPeripheral};
use rp2040_hal::{pac, Clock, Sio, Timer, Watchdog};

use crate::config::BAUD_RATE;
use crate::counter::read_split_counter;

/// Crystal frequency on the Pico board.
pub const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;

/// On-board LED (GPIO25).
pub type LedPin = Pin<Gpio25, FunctionSioOutput, PullDown>;

/// UART0 on GPIO0 (TX) / GPIO1 (RX).
pub type SerialPins = (
    Pin<Gpio0, FunctionUart, PullDown>,
    Pin<Gpio1, FunctionUart, PullDown>,
);

pub type Serial = UartPeripheral<Enabled, pac::UART0, SerialPins>;

/// Hardware handed to the blink reporter.
pub struct Board {
    pub timer: Timer,
    pub led: LedPin,
    pub serial: Serial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// `pac::Peripherals` were already taken.
    PeripheralsTaken,
    ClockInit,
    UartInit,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeripheralsTaken => f.write_str("peripherals already taken"),
            Self::ClockInit => f.write_str("clock and PLL initialization failed"),
            Self::UartInit => f.write_str("UART initialization failed"),
        }
    }
}

/// Bring up the board. Must be called once, before the blink loop.
///
/// Opens UART0 at [`BAUD_RATE`] 8N1 and configures the LED pin as a
/// push-pull output.
pub fn init_board() -> Result<Board, BoardError> {
    let mut pac = pac::Peripherals::take().ok_or(BoardError::PeripheralsTaken)?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| BoardError::ClockInit)?;

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let led = pins.gpio25.into_push_pull_output();

    let serial_pins: SerialPins = (pins.gpio0.into_function(), pins.gpio1.into_function());
    let serial = UartPeripheral::new(pac.UART0, serial_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .map_err(|_| BoardError::UartInit)?;

    Ok(Board { timer, led, serial })
}

/// Microseconds from the free-running TIMER peripheral, for log timestamps.
pub fn timer_ticks() -> u64 {
    // SAFETY: read-only access to the raw counter registers
    let timer = unsafe { &*pac::TIMER::ptr() };
    read_split_counter(
        || timer.timerawh().read().bits(),
        || timer.timerawl().read().bits(),
    )
}
