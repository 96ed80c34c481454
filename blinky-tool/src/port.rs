// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial port access.

use std::time::Duration;

use anyhow::{Context, Result};
use serialport::{SerialPort, SerialPortInfo, SerialPortType};

/// Open `path` for reading the report stream.
pub fn open(path: &str, baud: u32, timeout: Duration) -> Result<Box<dyn SerialPort>> {
    serialport::new(path, baud)
        .timeout(timeout)
        .open()
        .with_context(|| format!("Failed to open {} at {} baud", path, baud))
}

pub fn list() -> Result<Vec<SerialPortInfo>> {
    serialport::available_ports().context("Failed to enumerate serial ports")
}

/// Short human-readable description of a port's type.
pub fn describe(info: &SerialPortInfo) -> String {
    match &info.port_type {
        SerialPortType::UsbPort(usb) => {
            let mut text = format!("USB {:04x}:{:04x}", usb.vid, usb.pid);
            if let Some(product) = &usb.product {
                text.push_str(&format!(" {}", product));
            }
            if let Some(serial) = &usb.serial_number {
                text.push_str(&format!(" (serial {})", serial));
            }
            text
        }
        SerialPortType::PciPort => "PCI".to_string(),
        SerialPortType::BluetoothPort => "Bluetooth".to_string(),
        SerialPortType::Unknown => "unknown".to_string(),
    }
}
