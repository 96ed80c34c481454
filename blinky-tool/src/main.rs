// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host companion for the blinky firmware.

mod cli;
mod commands;
mod monitor;
mod port;
mod sequence;
mod uf2;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    cli::run(cli::Cli::parse())
}
