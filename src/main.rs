use clap::Parser;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};

mod checksum;
mod cipher;
mod pipeline;

use pipeline::Mode;

#[derive(Parser, Debug)]
#[command(version, about = "XOR-mask device data line by line before relaying it", long_about = None)]
struct Args {
    /// File holding the device data to transform, one record per line
    input: PathBuf,

    /// Destination file; transformed lines are appended
    output: PathBuf,

    /// Direction token: "in" to encrypt, "de" to decrypt
    mode: String,

    /// Key string; only its first byte drives the XOR mask
    key: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let key = args.key.bytes().next().unwrap_or(0);
    let mode = Mode::from_token(&args.mode);
    if mode.is_none() {
        log::warn!(
            "mode token {:?} is neither \"in\" nor \"de\"; input will be drained without output",
            args.mode
        );
    }

    // Attempt both opens before reporting either failure, so a bad input
    // path still leaves the (possibly created) output file behind.
    let input = File::open(&args.input);
    let output = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&args.output);

    let input = input.with_context(|| format!("failed to open input file {:?}", args.input))?;
    let output = output.with_context(|| format!("failed to open output file {:?}", args.output))?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);

    let consumed = pipeline::run(&mut reader, &mut writer, mode, key)?;
    writer
        .flush()
        .with_context(|| format!("failed to flush output file {:?}", args.output))?;

    log::info!("consumed {} lines from {:?}", consumed, args.input);

    Ok(())
}
