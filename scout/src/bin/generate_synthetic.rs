//! Generate a synthetic help-center catalog as JSON.
//!
//! Usage:
//!     cargo run --release --bin generate-synthetic -- --count 10000 --output benches/synthetic.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scout::{build_index, synthetic};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of source entries to generate
    #[arg(short, long, default_value_t = 10_000)]
    count: usize,

    /// RNG seed; the same seed always yields the same catalog
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Output path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let sources = synthetic::generate(args.count, args.seed);
    let json = sources.to_json_pretty()?;

    let Some(path) = args.output else {
        println!("{json}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

    let index = build_index(&sources, &[]);
    eprintln!("Catalog written: {}", path.display());
    eprintln!("  Source entries: {}", sources.len());
    eprintln!("  Indexed records: {}", index.len());
    for (record_type, count) in index.type_counts() {
        eprintln!("  {:<10} {}", record_type.display_name(), count);
    }
    Ok(())
}
