//! Literal find with wrap-around
//!
//! All offsets are character offsets into the buffer, matching how the
//! document addresses its rope. The functions here are pure queries and
//! never modify the text they scan.

/// Half-open character range `[start, end)` of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Find the next case-sensitive occurrence of `pattern` at or after `from_offset`,
/// wrapping to the start of the buffer if nothing follows
pub fn find_next(buffer: &str, from_offset: usize, pattern: &str) -> Option<MatchRange> {
    find_next_with_options(buffer, from_offset, pattern, true)
}

/// Find next occurrence with case sensitivity option (wraps back to start)
///
/// The forward scan includes a match starting exactly at `from_offset`. If it
/// finds nothing, the wrapped scan accepts the first match starting before
/// `from_offset`. Offsets past the end of the buffer are clamped.
pub fn find_next_with_options(
    buffer: &str,
    from_offset: usize,
    pattern: &str,
    case_sensitive: bool,
) -> Option<MatchRange> {
    if pattern.is_empty() {
        return None;
    }

    let from_byte = char_to_byte(buffer, from_offset);
    let start_byte = first_match_from(buffer, from_byte, pattern, case_sensitive).or_else(|| {
        first_match_from(buffer, 0, pattern, case_sensitive).filter(|&b| b < from_byte)
    })?;

    let start = buffer[..start_byte].chars().count();
    Some(MatchRange::new(start, start + pattern.chars().count()))
}

/// Find the previous occurrence starting strictly before `before_offset`,
/// wrapping to the last occurrence in the buffer
pub fn find_prev_with_options(
    buffer: &str,
    before_offset: usize,
    pattern: &str,
    case_sensitive: bool,
) -> Option<MatchRange> {
    let occurrences = find_all_with_options(buffer, pattern, case_sensitive);

    if let Some(&occ) = occurrences
        .iter()
        .rev()
        .find(|m| m.start < before_offset)
    {
        return Some(occ);
    }

    occurrences.last().copied()
}

/// Find all occurrences, including overlapping ones, in buffer order
pub fn find_all_with_options(
    buffer: &str,
    pattern: &str,
    case_sensitive: bool,
) -> Vec<MatchRange> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let pattern_chars = pattern.chars().count();
    let mut results = Vec::new();
    let mut byte = 0;
    let mut char_idx = 0;

    while let Some(match_byte) = first_match_from(buffer, byte, pattern, case_sensitive) {
        char_idx += buffer[byte..match_byte].chars().count();
        results.push(MatchRange::new(char_idx, char_idx + pattern_chars));

        // Step one char past the match start so overlapping matches are found
        let Some(first) = buffer[match_byte..].chars().next() else {
            break;
        };
        byte = match_byte + first.len_utf8();
        char_idx += 1;
    }

    results
}

/// Byte offset of the first match starting at or after `from_byte`
fn first_match_from(
    buffer: &str,
    from_byte: usize,
    pattern: &str,
    case_sensitive: bool,
) -> Option<usize> {
    let tail = &buffer[from_byte..];
    if case_sensitive {
        return tail.find(pattern).map(|i| from_byte + i);
    }

    tail.char_indices()
        .find(|&(i, _)| starts_with_ignore_case(&tail[i..], pattern))
        .map(|(i, _)| from_byte + i)
}

/// Char-by-char comparison so match length in chars always equals the pattern's
fn starts_with_ignore_case(haystack: &str, pattern: &str) -> bool {
    let mut hay = haystack.chars();
    pattern.chars().all(|p| match hay.next() {
        Some(h) => h == p || h.to_lowercase().eq(p.to_lowercase()),
        None => false,
    })
}

/// Byte offset of char `char_idx`, clamped to the end of the buffer
fn char_to_byte(buffer: &str, char_idx: usize) -> usize {
    buffer
        .char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(buffer.len())
}

/// Search session: the active pattern and where the next "find next" starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Last-used literal pattern; empty means no active search
    pub pattern: String,
    /// Offset just past the most recent match
    pub last_match_end: usize,
    /// Most recent match, for the host to paint
    pub highlight: Option<MatchRange>,
    pub case_sensitive: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SearchState {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            pattern: String::new(),
            last_match_end: 0,
            highlight: None,
            case_sensitive,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Replace the pattern; the next search starts at `cursor`
    ///
    /// Setting the same pattern again keeps the current position.
    pub fn set_pattern(&mut self, pattern: impl Into<String>, cursor: usize) {
        let pattern = pattern.into();
        if pattern == self.pattern {
            return;
        }
        self.pattern = pattern;
        self.last_match_end = cursor;
        self.highlight = None;
    }

    /// Find the next match and advance past it
    pub fn find_next(&mut self, buffer: &str) -> Option<MatchRange> {
        let found = find_next_with_options(
            buffer,
            self.last_match_end,
            &self.pattern,
            self.case_sensitive,
        );
        self.record(found)
    }

    /// Find the match before the current highlight (or before the cursor
    /// position when nothing is highlighted)
    pub fn find_previous(&mut self, buffer: &str) -> Option<MatchRange> {
        let before = self
            .highlight
            .map(|m| m.start)
            .unwrap_or(self.last_match_end);
        let found = find_prev_with_options(buffer, before, &self.pattern, self.case_sensitive);
        self.record(found)
    }

    fn record(&mut self, found: Option<MatchRange>) -> Option<MatchRange> {
        match found {
            Some(m) => {
                tracing::trace!(start = m.start, end = m.end, "search hit");
                self.last_match_end = m.end;
                self.highlight = Some(m);
            }
            None => {
                tracing::debug!(pattern = %self.pattern, "search miss");
                self.highlight = None;
            }
        }
        found
    }

    /// Drop the highlight after the buffer changed under it
    pub fn invalidate_highlight(&mut self) {
        self.highlight = None;
    }

    /// Move the next search start, e.g. after the cursor moved
    pub fn reset_origin(&mut self, cursor: usize) {
        self.last_match_end = cursor;
        self.highlight = None;
    }

    pub fn clear(&mut self) {
        self.pattern.clear();
        self.last_match_end = 0;
        self.highlight = None;
    }
}
