use memchr::memmem;

use crate::types::{Markers, Offset, Span};

/// Forward-only scan for start/end marker pairs.
///
/// Each span runs from a start marker to the first end marker found at or
/// after it, end marker included. The cursor then resumes right after that
/// end marker, so spans never overlap and a start marker inside a consumed
/// span is never revisited. A start marker with no end marker after it ends
/// the scan.
pub struct SpanScanner<'a> {
    data: &'a [u8],
    start: memmem::Finder<'static>,
    end: memmem::Finder<'static>,
    end_len: usize,
    cursor: Offset,
    done: bool,
}

impl<'a> SpanScanner<'a> {
    pub fn new(data: &'a [u8], markers: &Markers) -> Self {
        Self {
            data,
            start: memmem::Finder::new(&markers.start).into_owned(),
            end: memmem::Finder::new(&markers.end).into_owned(),
            end_len: markers.end.len(),
            cursor: 0,
            done: markers.start.is_empty() || markers.end.is_empty(),
        }
    }

    pub fn cursor(&self) -> Offset {
        self.cursor
    }
}

impl Iterator for SpanScanner<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.done || self.cursor >= self.data.len() {
            self.done = true;
            return None;
        }

        let Some(rel) = self.start.find(&self.data[self.cursor..]) else {
            self.done = true;
            return None;
        };
        let start = self.cursor + rel;

        let Some(rel) = self.end.find(&self.data[start..]) else {
            tracing::debug!("start marker at {:#x} has no end marker, stopping", start);
            self.done = true;
            return None;
        };
        let end = start + rel + self.end_len;

        self.cursor = end;
        Some(Span::new(start, end))
    }
}

pub fn find_spans(data: &[u8], markers: &Markers) -> Vec<Span> {
    SpanScanner::new(data, markers).collect()
}
