//! CLI for the simulated Fibonacci character device: open it, walk a range
//! of offsets, and print what the device reports.

#[path = "device.rs"]
mod device;

use clap::Parser;
use device::{FibDevice, SeekFrom, WriteMode};

/// Drive the simulated Fibonacci character device across a range of
/// offsets with a write-then-read sweep.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Highest offset to exercise.
    #[arg(long, default_value_t = 1000)]
    max_offset: u64,

    /// Which algorithm `write` should time: "linear" or "doubling".
    #[arg(long, default_value = "linear")]
    write_mode: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mode = match args.write_mode.as_str() {
        "doubling" => WriteMode::Doubling,
        _ => WriteMode::Linear,
    };

    let device = FibDevice::new();
    let mut handle = device.open().expect("device is not already open");

    for offset in 0..=args.max_offset {
        handle.seek(SeekFrom::Start(offset as i64));
        let elapsed = handle.write(mode);
        println!("write at offset {offset} took {elapsed:?}");
    }

    for offset in 0..=args.max_offset {
        handle.seek(SeekFrom::Start(offset as i64));
        let sequence = handle.read();
        println!("read at offset {offset} returned {sequence}");
    }
}
