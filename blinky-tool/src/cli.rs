// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use blinky_common::BAUD_RATE;

use crate::commands;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "blinky-tool")]
#[command(version = env!("BLINKY_VERSION"))]
#[command(about = "Serial monitor and packaging tool for the blinky firmware")]
pub struct Cli {
    /// Serial port of the UART adapter (e.g., /dev/ttyUSB0)
    #[arg(short, long)]
    pub port: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List serial ports
    Ports,

    /// Watch the report stream and check that the counter advances by one
    Monitor {
        /// Baud rate
        #[arg(short, long, default_value_t = BAUD_RATE)]
        baud: u32,

        /// Stop after this many reports
        #[arg(short, long)]
        cycles: Option<u64>,

        /// Exit with an error if any report was skipped, repeated or out of order
        #[arg(long)]
        strict: bool,

        /// Read timeout in milliseconds
        #[arg(long, default_value = "1000")]
        timeout_ms: u64,
    },

    /// Convert a raw binary file to UF2 format
    #[command(name = "bin2uf2")]
    Bin2Uf2 {
        /// Input binary file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output UF2 file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Base address in hex (default: RP2040 XIP flash)
        #[arg(short = 'a', long, default_value = "0x10000000", value_parser = parse_hex_u32)]
        base_address: u32,

        /// Family ID in hex (default: RP2040)
        #[arg(short, long, default_value = "0xE48BFF56", value_parser = parse_hex_u32)]
        family_id: u32,
    },
}

/// Parse a hex string (with or without 0x prefix) into a u32.
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {s:?}: {e}"))
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ports => commands::ports(),
        Commands::Monitor {
            baud,
            cycles,
            strict,
            timeout_ms,
        } => commands::monitor(
            required_port(cli.port.as_deref())?,
            baud,
            cycles,
            strict,
            Duration::from_millis(timeout_ms),
        ),
        Commands::Bin2Uf2 {
            input,
            output,
            base_address,
            family_id,
        } => commands::bin2uf2(&input, &output, base_address, family_id),
    }
}

fn required_port(port: Option<&str>) -> Result<&str> {
    port.ok_or_else(|| anyhow!("--port is required for this command"))
}
