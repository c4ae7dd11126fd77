use crate::core::engine::RunOutput;
use crate::core::stats::BaseClass;
use anyhow::Result;
use std::io::Write;

/// Human-readable per-file report. Sections that would divide by zero
/// (averages, percentages, extrema) are omitted rather than printed with
/// placeholder values.
pub fn write<W: Write>(mut w: W, output: &RunOutput) -> Result<()> {
    let stats = &output.stats;

    writeln!(w)?;
    writeln!(w, "=== Genome Statistics for {} ===", output.file_name)?;
    writeln!(w, "Number of sequences: {}", stats.sequence_count)?;
    writeln!(w, "Total bases: {}", stats.total_bases)?;
    writeln!(w, "Total sequence length: {}", stats.total_sequence_length)?;

    if let Some(avg) = stats.average_sequence_length() {
        writeln!(w, "Average sequence length: {:.2}", avg)?;
    }

    if stats.total_bases > 0 {
        for (class, label) in [
            (BaseClass::Gc, "GC content"),
            (BaseClass::At, "AT content"),
            (BaseClass::N, "N content"),
            (BaseClass::Other, "Other bases"),
        ] {
            if let Some(pct) = stats.class_percent(class) {
                writeln!(w, "{}: {:.2}%", label, pct)?;
            }
        }
    }

    if let (Some(max), Some(min)) = (stats.max_sequence_length, stats.min_sequence_length) {
        writeln!(w, "Max sequence length: {}", max)?;
        writeln!(w, "Min sequence length: {}", min)?;
    }

    writeln!(w, "Base composition:")?;
    writeln!(w, "  A/T: {}", stats.at_count)?;
    writeln!(w, "  G/C: {}", stats.gc_count)?;
    writeln!(w, "  N: {}", stats.n_count)?;
    writeln!(w, "  Other: {}", stats.other_count)?;

    writeln!(w)?;
    writeln!(
        w,
        "Execution time: {:.2} seconds",
        output.elapsed.as_secs_f64()
    )?;

    Ok(())
}
