//! File delta example.
//!
//! Writes the fingerprint of an original file, then prints how a modified
//! file's chunks classify against it.
//!
//! Run with:
//!     cargo run --example delta_files -- original.txt modified.txt [fingerprint.bin]

use std::env;
use std::fs::File;
use std::process;

use chunkdelta::{RollingConfig, io};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let (Some(original), Some(modified)) = (args.next(), args.next()) else {
        eprintln!("usage: delta_files <original> <modified> [fingerprint.bin]");
        process::exit(2);
    };
    let fingerprint_path = args
        .next()
        .unwrap_or_else(|| "fingerprint.bin".to_string());

    let config = RollingConfig::default();

    let fingerprint = io::signature(
        File::open(&original)?,
        File::create(&fingerprint_path)?,
        config,
    )?;
    println!(
        "Fingerprint of {}: {} digests -> {}\n",
        original,
        fingerprint.len(),
        fingerprint_path
    );

    let delta = io::delta(
        File::open(&fingerprint_path)?,
        File::open(&modified)?,
        config,
    )?;
    println!("Delta of {}:\n{}", modified, delta);

    if delta.is_unchanged() {
        println!("\nNo chunk-level differences");
    }

    Ok(())
}
