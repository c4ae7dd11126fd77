use crate::core::fasta::LineKind;

/// Base class partition. Every byte falls in exactly one class, so
/// `gc + at + n + other == total_bases` holds for any input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaseClass {
    Gc,
    At,
    N,
    Other,
}

const fn class_of(b: u8) -> BaseClass {
    match b {
        b'G' | b'g' | b'C' | b'c' => BaseClass::Gc,
        b'A' | b'a' | b'T' | b't' => BaseClass::At,
        b'N' | b'n' => BaseClass::N,
        _ => BaseClass::Other,
    }
}

const CLASS_TABLE: [BaseClass; 256] = {
    let mut table = [BaseClass::Other; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = class_of(i as u8);
        i += 1;
    }
    table
};

pub fn classify_base(b: u8) -> BaseClass {
    CLASS_TABLE[b as usize]
}

/// Per-file aggregate. Counters are u64, matching the 64-bit running
/// counters of the original tool; overflow traps in debug builds.
/// Length extrema are None until the first non-empty record is finalized.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenomeStats {
    pub total_bases: u64,
    pub gc_count: u64,
    pub at_count: u64,
    pub n_count: u64,
    pub other_count: u64,
    pub sequence_count: u64,
    pub max_sequence_length: Option<u64>,
    pub min_sequence_length: Option<u64>,
    pub total_sequence_length: u64,
}

impl GenomeStats {
    pub fn average_sequence_length(&self) -> Option<f64> {
        if self.sequence_count == 0 {
            return None;
        }
        Some(self.total_sequence_length as f64 / self.sequence_count as f64)
    }

    /// Percentage of `total_bases` in the given class; None on empty input.
    pub fn class_percent(&self, class: BaseClass) -> Option<f64> {
        if self.total_bases == 0 {
            return None;
        }
        let count = match class {
            BaseClass::Gc => self.gc_count,
            BaseClass::At => self.at_count,
            BaseClass::N => self.n_count,
            BaseClass::Other => self.other_count,
        };
        Some(count as f64 * 100.0 / self.total_bases as f64)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Before the first header; sequence data here belongs to no record and
    /// is discarded.
    Idle,
    InRecord,
}

/// Push-model accumulator: one classified line per call, record boundaries
/// closed on the next header or at `finish`.
pub struct Accumulator {
    stats: GenomeStats,
    state: State,
    current_len: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            stats: GenomeStats::default(),
            state: State::Idle,
            current_len: 0,
        }
    }

    pub fn push(&mut self, line: LineKind<'_>) {
        match line {
            LineKind::Header(_) => {
                self.close_record();
                self.stats.sequence_count += 1;
                self.state = State::InRecord;
            }
            LineKind::Fragment(seq) => {
                if self.state == State::Idle {
                    return;
                }
                for &b in seq {
                    self.stats.total_bases += 1;
                    match classify_base(b) {
                        BaseClass::Gc => self.stats.gc_count += 1,
                        BaseClass::At => self.stats.at_count += 1,
                        BaseClass::N => self.stats.n_count += 1,
                        BaseClass::Other => self.stats.other_count += 1,
                    }
                }
                self.current_len += seq.len() as u64;
            }
            LineKind::Blank => {}
        }
    }

    /// End-of-stream finalization. Closes the open record (if any) without
    /// touching `sequence_count`, which was bumped at its header.
    pub fn finish(mut self) -> GenomeStats {
        self.close_record();
        debug_assert_eq!(
            self.stats.gc_count + self.stats.at_count + self.stats.n_count
                + self.stats.other_count,
            self.stats.total_bases
        );
        self.stats
    }

    // Zero-length records never update extrema or the length sum.
    fn close_record(&mut self) {
        if self.state == State::InRecord && self.current_len > 0 {
            let len = self.current_len;
            self.stats.max_sequence_length =
                Some(self.stats.max_sequence_length.map_or(len, |m| m.max(len)));
            self.stats.min_sequence_length =
                Some(self.stats.min_sequence_length.map_or(len, |m| m.min(len)));
            self.stats.total_sequence_length += len;
        }
        self.current_len = 0;
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fasta::{Lines, classify};

    fn accumulate(input: &[u8]) -> GenomeStats {
        let mut acc = Accumulator::new();
        for line in Lines::new(input) {
            acc.push(classify(line));
        }
        acc.finish()
    }

    fn partition_sum(s: &GenomeStats) -> u64 {
        s.gc_count + s.at_count + s.n_count + s.other_count
    }

    #[test]
    fn base_classes_cover_all_bytes() {
        assert_eq!(classify_base(b'G'), BaseClass::Gc);
        assert_eq!(classify_base(b'c'), BaseClass::Gc);
        assert_eq!(classify_base(b'A'), BaseClass::At);
        assert_eq!(classify_base(b't'), BaseClass::At);
        assert_eq!(classify_base(b'N'), BaseClass::N);
        assert_eq!(classify_base(b'n'), BaseClass::N);
        // Ambiguity codes, gaps and junk all land in Other.
        for b in [b'R', b'Y', b'W', b'-', b'0', b' ', 0xFFu8] {
            assert_eq!(classify_base(b), BaseClass::Other);
        }
    }

    #[test]
    fn empty_input() {
        let s = accumulate(b"");
        assert_eq!(s, GenomeStats::default());
    }

    #[test]
    fn single_record() {
        let s = accumulate(b">seq1\nACGTACGT\n");
        assert_eq!(s.sequence_count, 1);
        assert_eq!(s.total_bases, 8);
        assert_eq!(s.gc_count, 4);
        assert_eq!(s.at_count, 4);
        assert_eq!(s.max_sequence_length, Some(8));
        assert_eq!(s.min_sequence_length, Some(8));
        assert_eq!(s.total_sequence_length, 8);
    }

    #[test]
    fn record_finalized_at_eof_not_counted_twice() {
        // No trailing header: the 8-base record closes at end-of-stream only.
        let s = accumulate(b">seq1\nACGTACGT\n");
        assert_eq!(s.sequence_count, 1);
        assert_eq!(s.total_sequence_length, 8);
        let unterminated = accumulate(b">seq1\nACGTACGT");
        assert_eq!(unterminated, s);
    }

    #[test]
    fn empty_record_counts_but_skips_extrema() {
        let s = accumulate(b">seq1\n>seq2\nACGT\n");
        assert_eq!(s.sequence_count, 2);
        assert_eq!(s.total_bases, 4);
        assert_eq!(s.max_sequence_length, Some(4));
        assert_eq!(s.min_sequence_length, Some(4));
        assert_eq!(s.total_sequence_length, 4);
    }

    #[test]
    fn header_only_file_has_no_extrema() {
        let s = accumulate(b">a\n>b\n>c\n");
        assert_eq!(s.sequence_count, 3);
        assert_eq!(s.total_bases, 0);
        assert_eq!(s.max_sequence_length, None);
        assert_eq!(s.min_sequence_length, None);
        assert_eq!(s.total_sequence_length, 0);
    }

    #[test]
    fn pre_header_data_discarded() {
        let s = accumulate(b"ACGT\n>seq1\nAC\n");
        assert_eq!(s.total_bases, 2);
        assert_eq!(s.sequence_count, 1);
        assert_eq!(s.total_sequence_length, 2);
    }

    #[test]
    fn case_insensitive_classification() {
        let lower = accumulate(b">s\nacgtACGT\n");
        let upper = accumulate(b">s\nACGTacgt\n");
        assert_eq!(lower.gc_count, 4);
        assert_eq!(lower.at_count, 4);
        assert_eq!(lower.gc_count, upper.gc_count);
        assert_eq!(lower.at_count, upper.at_count);
    }

    #[test]
    fn other_class_catch_all() {
        let s = accumulate(b">s\nACGTNXRYW-\n");
        assert_eq!(s.gc_count, 2);
        assert_eq!(s.at_count, 2);
        assert_eq!(s.n_count, 1);
        assert_eq!(s.other_count, 5);
        assert_eq!(s.total_bases, 10);
        // Junk still counts toward record length.
        assert_eq!(s.total_sequence_length, 10);
    }

    #[test]
    fn blank_lines_inside_record_are_ignored() {
        let s = accumulate(b">s\nAC\n\nGT\n\n");
        assert_eq!(s.total_bases, 4);
        assert_eq!(s.total_sequence_length, 4);
        assert_eq!(s.max_sequence_length, Some(4));
    }

    #[test]
    fn multi_record_extrema() {
        let s = accumulate(b">a\nACGTAC\n>b\nGG\n>c\nNNNN\n");
        assert_eq!(s.sequence_count, 3);
        assert_eq!(s.max_sequence_length, Some(6));
        assert_eq!(s.min_sequence_length, Some(2));
        assert_eq!(s.total_sequence_length, 12);
        assert_eq!(s.total_bases, 12);
    }

    #[test]
    fn multi_line_record_accumulates_length() {
        let s = accumulate(b">s\nACGT\nACGT\nAC\n");
        assert_eq!(s.sequence_count, 1);
        assert_eq!(s.max_sequence_length, Some(10));
        assert_eq!(s.min_sequence_length, Some(10));
    }

    #[test]
    fn partition_invariant_holds() {
        for input in [
            b"".as_slice(),
            b">s\nACGTNXRYW-\n",
            b"junk\n>s\nAC GT\n>t\n\n>u\nnnNN\n",
            b">only headers\n>again\n",
        ] {
            let s = accumulate(input);
            assert_eq!(partition_sum(&s), s.total_bases);
        }
    }

    #[test]
    fn reprocessing_is_idempotent() {
        let input = b">a\nACGTNXRYW-\n>b\ngggccc\n";
        assert_eq!(accumulate(input), accumulate(input));
    }

    #[test]
    fn average_and_percent_helpers() {
        let s = accumulate(b">a\nGGCC\n>b\nAATT\n");
        assert_eq!(s.average_sequence_length(), Some(4.0));
        assert_eq!(s.class_percent(BaseClass::Gc), Some(50.0));
        assert_eq!(s.class_percent(BaseClass::N), Some(0.0));

        let empty = GenomeStats::default();
        assert_eq!(empty.average_sequence_length(), None);
        assert_eq!(empty.class_percent(BaseClass::Gc), None);
    }
}
