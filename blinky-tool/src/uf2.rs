// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! UF2 image encoding for drag-and-drop flashing.

/// Start of the RP2040 XIP flash window.
pub const RP2040_FLASH_BASE: u32 = 0x1000_0000;
/// UF2 family ID assigned to the RP2040.
pub const RP2040_FAMILY_ID: u32 = 0xE48B_FF56;

pub const BLOCK_SIZE: usize = 512;
pub const PAYLOAD_SIZE: usize = 256;

const MAGIC_START0: u32 = 0x0A32_4655;
const MAGIC_START1: u32 = 0x9E5D_5157;
const MAGIC_END: u32 = 0x0AB1_6F30;
const FLAG_FAMILY_ID_PRESENT: u32 = 0x0000_2000;

/// Data area of a block: header and payload, zero padded up to the end magic.
const DATA_AREA: usize = BLOCK_SIZE - 4;

struct Block<'a> {
    target_addr: u32,
    block_no: u32,
    num_blocks: u32,
    family_id: u32,
    payload: &'a [u8],
}

impl Block<'_> {
    fn write_to(&self, out: &mut Vec<u8>) {
        let start = out.len();
        for word in [
            MAGIC_START0,
            MAGIC_START1,
            FLAG_FAMILY_ID_PRESENT,
            self.target_addr,
            PAYLOAD_SIZE as u32,
            self.block_no,
            self.num_blocks,
            self.family_id,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(self.payload);
        out.resize(start + DATA_AREA, 0);
        out.extend_from_slice(&MAGIC_END.to_le_bytes());
    }
}

/// Wrap `data` into UF2 blocks of [`PAYLOAD_SIZE`] bytes each, mapped
/// contiguously from `base_address`.
pub fn encode(data: &[u8], base_address: u32, family_id: u32) -> Vec<u8> {
    let num_blocks = data.len().div_ceil(PAYLOAD_SIZE);
    let mut out = Vec::with_capacity(num_blocks * BLOCK_SIZE);

    for (i, payload) in data.chunks(PAYLOAD_SIZE).enumerate() {
        Block {
            target_addr: base_address.wrapping_add((i * PAYLOAD_SIZE) as u32),
            block_no: i as u32,
            num_blocks: num_blocks as u32,
            family_id,
            payload,
        }
        .write_to(&mut out);
    }

    out
}
