/// Marker that opens a transcript segment.
pub const OPEN: &str = "[[";
/// Marker that closes a transcript segment.
pub const CLOSE: &str = "]]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingOpen,
    SeekingClose { start: usize },
    Done,
}

/// Iterator over the `[[...]]` segments of a transcript.
///
/// Text outside the markers (captions, `{{title text}}`, `<<sound>>` lines) is skipped.
/// An opening marker with no closer before end of input is dropped.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
    state: ScanState,
}

impl<'a> Segments<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0, state: ScanState::SeekingOpen }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            match self.state {
                ScanState::Done => return None,
                ScanState::SeekingOpen => match self.text[self.pos..].find(OPEN) {
                    Some(off) => {
                        let start = self.pos + off + OPEN.len();
                        self.pos = start;
                        self.state = ScanState::SeekingClose { start };
                    }
                    None => {
                        self.pos = self.text.len();
                        self.state = ScanState::Done;
                    }
                },
                ScanState::SeekingClose { start } => match self.text[self.pos..].find(CLOSE) {
                    Some(off) => {
                        let end = self.pos + off;
                        self.pos = end + CLOSE.len();
                        self.state = ScanState::SeekingOpen;
                        return Some(&self.text[start..end]);
                    }
                    None => {
                        self.pos = self.text.len();
                        self.state = ScanState::Done;
                    }
                },
            }
        }
    }
}

/// Returns true if the transcript is in the bracketed format the indexer accepts.
pub fn is_well_formed(transcript: &str) -> bool {
    transcript.starts_with(OPEN)
}

/// Normalize one space-separated candidate. Rejects empty candidates and those not
/// starting with a letter, then trims trailing `.` and `,`. Case is preserved.
pub fn normalize(candidate: &str) -> Option<&str> {
    let first = candidate.chars().next()?;
    if !first.is_alphabetic() {
        return None;
    }
    Some(candidate.trim_end_matches(['.', ',']))
}

/// Tokenize a transcript into words, segment by segment, left to right.
/// Repeated words are yielded every time they occur.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    Segments::new(text).flat_map(|segment| segment.split(' ').filter_map(normalize))
}
