// Copyright (c) 2026 ADNT Sarl <info@adnt.io>
// SPDX-License-Identifier: MIT

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", blinky_common::timer_ticks());

use blinky_common::{init_board, BlinkReporter, BAUD_RATE};
use cortex_m_rt::entry;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

#[entry]
fn main() -> ! {
    defmt::println!("Blinky firmware v{}", env!("BLINKY_VERSION"));

    let board = match init_board() {
        Ok(board) => board,
        Err(e) => defmt::panic!("Board init failed: {}", e),
    };
    defmt::println!("UART0 open at {} baud, blinking LED", BAUD_RATE);

    let mut reporter = BlinkReporter::new(board.led, board.timer, board.serial);

    loop {
        let report = reporter.cycle();
        defmt::debug!("Cycle done: {}", report);
    }
}
