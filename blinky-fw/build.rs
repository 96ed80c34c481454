// Copyright (c) 2026 ADNT Sarl <info@adnt.io>
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let workspace_dir = manifest_dir.parent().unwrap();

    // Linker setup only applies to the Cortex-M0+ target
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumbv6m") {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        let linker_script = workspace_dir.join("linker_scripts").join("rp2040.x");

        let memory = fs::read_to_string(&linker_script).expect("Failed to read rp2040.x");
        fs::write(out_dir.join("memory.x"), memory).expect("Failed to write memory.x");

        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rustc-link-arg=--nmagic");
        println!("cargo:rustc-link-arg=-Tlink.x");
        println!("cargo:rustc-link-arg=-Tdefmt.x");
        println!("cargo:rerun-if-changed={}", linker_script.display());
    }
    println!("cargo:rerun-if-changed=build.rs");

    // Read version from project-root VERSION file
    let version_file = workspace_dir.join("VERSION");
    let version = fs::read_to_string(&version_file)
        .expect("Failed to read VERSION file")
        .trim()
        .to_string();
    println!("cargo:rustc-env=BLINKY_VERSION={}", version);
    println!("cargo:rerun-if-changed={}", version_file.display());
}
