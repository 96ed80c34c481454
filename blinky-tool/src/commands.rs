// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::fs;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::monitor::{watch, LineOutcome, Monitor};
use crate::port;
use crate::sequence::Summary;
use crate::uf2::{self, RP2040_FAMILY_ID};

/// List serial ports.
pub fn ports() -> Result<()> {
    let ports = port::list()?;
    if ports.is_empty() {
        println!("No serial ports found.");
        return Ok(());
    }

    for info in &ports {
        println!("{:<24} {}", info.port_name, port::describe(info));
    }
    Ok(())
}

/// Watch the report stream until `cycles` reports arrived or the port closes.
pub fn monitor(
    path: &str,
    baud: u32,
    cycles: Option<u64>,
    strict: bool,
    timeout: Duration,
) -> Result<()> {
    let serial = port::open(path, baud, timeout)?;
    let mut reader = BufReader::new(serial);
    let mut session = Monitor::new(cycles);

    println!("Monitoring {} at {} baud (Ctrl-C to stop)", path, baud);

    let pb = match cycles {
        Some(n) => {
            let pb = ProgressBar::new(n);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} reports")?
                    .progress_chars("#>-"),
            );
            pb
        }
        None => ProgressBar::hidden(),
    };

    // A hidden bar swallows println, so print directly in that case
    let emit = |text: &str| {
        if pb.is_hidden() {
            println!("{}", text);
        } else {
            pb.println(text);
        }
    };

    watch(&mut reader, &mut session, |line, outcome| match outcome {
        LineOutcome::Report {
            report,
            observation,
        } => {
            if observation.is_continuous() {
                emit(line);
            } else {
                emit(&format!("{}  <-- {}", report, observation));
            }
            pb.inc(1);
        }
        LineOutcome::Noise => emit(&format!("? {}", line)),
    })?;

    pb.finish_and_clear();
    print_summary(session.summary());

    if strict && !session.summary().is_clean() {
        bail!("Report sequence had discontinuities");
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!();
    println!("Summary:");
    println!("  Reports:      {}", summary.reports);
    println!("  Missed:       {}", summary.missed);
    println!("  Repeated:     {}", summary.repeats);
    println!("  Restarts:     {}", summary.restarts);
    println!("  Out of order: {}", summary.out_of_order);
    println!("  Wraps:        {}", summary.wraps);
    println!("  Other lines:  {}", summary.noise_lines);
}

/// Convert a raw binary file to UF2 format.
pub fn bin2uf2(input: &Path, output: &Path, base_address: u32, family_id: u32) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    if data.is_empty() {
        bail!("{} is empty", input.display());
    }

    let image = uf2::encode(&data, base_address, family_id);
    fs::write(output, &image).with_context(|| format!("Failed to write {}", output.display()))?;

    let family = if family_id == RP2040_FAMILY_ID {
        "RP2040".to_string()
    } else {
        format!("0x{:08x}", family_id)
    };
    println!(
        "UF2: {} ({} blocks, {} bytes, base 0x{:08x}, family {})",
        output.display(),
        image.len() / uf2::BLOCK_SIZE,
        data.len(),
        base_address,
        family
    );

    Ok(())
}
