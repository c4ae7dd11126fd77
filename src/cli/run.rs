use crate::cli::args::Cli;
use crate::core::engine::{self, RunConfig};
use crate::report;
use anyhow::{Result, bail};
use clap::Parser;
use clap::error::ErrorKind;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub fn entry() -> Result<()> {
    // clap exits with 2 on usage errors by default; this tool's contract is 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    run(cli)
}

fn run(args: Cli) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    stage(stats, "preflight", || {
        if args.input.as_os_str() == "-" {
            bail!("stdin is not supported; provide a FASTA file path");
        }
        if !args.input.is_file() {
            bail!("input file not found: {}", args.input.display());
        }
        Ok(())
    })?;

    let input_size = fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);

    println!("Processing FASTA file: {}", args.input.display());

    let config = RunConfig {
        input: args.input.clone(),
    };

    let t_engine = Instant::now();
    let output = engine::run(config)?;
    stage_done(stats, "engine", t_engine);
    if stats {
        eprintln!(
            "GENOSTAT_STATS input={} bytes={} sequences={} bases={}",
            args.input.display(),
            input_size,
            output.stats.sequence_count,
            output.stats.total_bases
        );
    }

    let t_report = Instant::now();
    let stdout = io::stdout();
    let mut w = stdout.lock();
    report::text::write(&mut w, &output)?;
    w.flush()?;
    stage_done(stats, "report", t_report);

    if stats {
        eprintln!("GENOSTAT_STATS total={}", fmt_dur(t0.elapsed()));
    }

    Ok(())
}

fn stats_enabled() -> bool {
    matches!(env::var("GENOSTAT_STATS").as_deref(), Ok("1"))
}

fn stage<F>(stats: bool, name: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let t = Instant::now();
    let res = f();
    if stats {
        eprintln!("GENOSTAT_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
    res
}

fn stage_done(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("GENOSTAT_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
