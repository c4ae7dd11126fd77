use memchr::memchr;

/// Structural classification of one logical line. Header titles are carried
/// but never enter the statistics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
    Header(&'a [u8]),
    Fragment(&'a [u8]),
    Blank,
}

pub fn classify(line: &[u8]) -> LineKind<'_> {
    match line.split_first() {
        Some((&b'>', title)) => LineKind::Header(title),
        Some(_) => LineKind::Fragment(line),
        None => LineKind::Blank,
    }
}

/// Forward-only iterator over logical lines of a byte buffer. Yields each
/// line with its terminator stripped (`\n`, or `\r\n`); a final line without
/// a trailing terminator is yielded as-is.
pub struct Lines<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        let mut line = match memchr(b'\n', rest) {
            Some(nl) => {
                self.pos += nl + 1;
                &rest[..nl]
            }
            None => {
                self.pos = self.data.len();
                rest
            }
        };
        if let Some((&b'\r', head)) = line.split_last() {
            line = head;
        }
        Some(line)
    }
}
