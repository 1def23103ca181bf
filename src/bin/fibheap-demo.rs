//! Walks a Fibonacci heap through insert, extract-min and merge, printing the
//! forest after each step.
//!
//! ```bash
//! cargo run --bin fibheap-demo
//! cargo run --bin fibheap-demo -- --keys 10,4,8 --other 1,2 --drain
//! RUST_LOG=trace cargo run --bin fibheap-demo
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fibonacci_ring_heap::{FibonacciHeap, Key};

#[derive(Parser)]
#[command(version, about = "Insert, extract and merge on a Fibonacci heap")]
struct Cli {
    /// Keys inserted into the primary heap
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [3, 7, 1, 9, 5]
    )]
    keys: Vec<Key>,

    /// Keys inserted into the heap that is merged into the primary one
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [2, 8, 6]
    )]
    other: Vec<Key>,

    /// Extract every key after merging and print them in order
    #[arg(long)]
    drain: bool,
}

impl Cli {
    fn try_execute(&self) -> Result<()> {
        let mut heap: FibonacciHeap = self.keys.iter().copied().collect();
        log::info!("inserted {} keys into the primary heap", heap.len());

        println!("Initial heap:");
        print!("{heap}");

        let min = heap
            .extract_min()
            .context("the primary heap needs at least one key")?;
        println!("Extracted min: {min}");
        println!("Heap after extracting min:");
        print!("{heap}");

        let other: FibonacciHeap = self.other.iter().copied().collect();
        println!("Other heap:");
        print!("{other}");

        heap.merge(other);
        println!("Merged heap:");
        print!("{heap}");

        if self.drain {
            let sorted = heap.into_sorted_vec();
            let rendered: Vec<String> = sorted.iter().map(Key::to_string).collect();
            println!("Drained: {}", rendered.join(" "));
        }

        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = cli.try_execute() {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
