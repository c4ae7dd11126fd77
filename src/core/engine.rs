use crate::core::fasta::{Lines, classify};
use crate::core::io::MmapSource;
use crate::core::stats::{Accumulator, GenomeStats};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub struct RunConfig {
    pub input: PathBuf,
}

#[derive(Debug)]
pub struct RunOutput {
    pub stats: GenomeStats,
    pub elapsed: Duration,
    pub file_name: String,
}

/// Single forward pass over one FASTA file: mmap the input, split it into
/// logical lines and feed them to the accumulator in order. Record
/// boundaries depend on line order, so this stays strictly sequential.
pub fn run(cfg: RunConfig) -> Result<RunOutput> {
    let file_name = cfg
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .context("failed to determine input filename")?;

    let t0 = Instant::now();
    let source = MmapSource::open(&cfg.input)?;

    let mut acc = Accumulator::new();
    for line in Lines::new(source.bytes()) {
        acc.push(classify(line));
    }
    let stats = acc.finish();

    Ok(RunOutput {
        stats,
        elapsed: t0.elapsed(),
        file_name,
    })
}
