// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! 64-bit reads of a hardware counter exposed as two 32-bit registers.

/// Read a counter split into `high` and `low` words without tearing.
///
/// The high word is read before and after the low word; if it changed, the
/// low word rolled over in between and the read is retried.
pub fn read_split_counter<H, L>(mut high: H, mut low: L) -> u64
where
    H: FnMut() -> u32,
    L: FnMut() -> u32,
{
    loop {
        let hi = high();
        let lo = low();
        if high() == hi {
            return (u64::from(hi) << 32) | u64::from(lo);
        }
    }
}
