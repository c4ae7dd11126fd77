use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "genostat",
    version,
    about = "Descriptive statistics for FASTA nucleotide files"
)]
pub struct Cli {
    pub input: PathBuf,
}
