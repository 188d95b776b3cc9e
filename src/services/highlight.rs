// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Splitting field values into highlighted and plain pieces using the match
//! ranges returned with each search hit.
//!
//! Offsets are byte offsets into the original, unescaped field value.

use crate::models::search::MatchingRange;

/// A piece of a field value, highlighted or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Sort ranges by start, drop empty ones and merge overlapping ones, so the
/// result is strictly ascending and non-overlapping.
pub fn normalize_ranges(ranges: &[MatchingRange]) -> Vec<MatchingRange> {
    let mut sorted: Vec<MatchingRange> = ranges.iter().filter(|r| !r.is_empty()).cloned().collect();
    sorted.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<MatchingRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start < last.end => {
                last.end = last.end.max(range.end);
                last.indices = merge_indices(last.indices.take(), range.indices);
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn merge_indices(a: Option<Vec<usize>>, b: Option<Vec<usize>>) -> Option<Vec<usize>> {
    match (a, b) {
        (None, None) => None,
        (a, b) => {
            let mut all: Vec<usize> = a.into_iter().chain(b).flatten().collect();
            all.sort_unstable();
            all.dedup();
            Some(all)
        }
    }
}

/// Split `text` into segments covering it exactly once, in order.
///
/// Offsets past the end are clamped and offsets inside a multi-byte character
/// are widened to the whole character.
pub fn highlight_segments<'a>(text: &'a str, ranges: &[MatchingRange]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for range in normalize_ranges(ranges) {
        let start = floor_char_boundary(text, range.start).max(cursor);
        let end = ceil_char_boundary(text, range.end);
        if start >= end {
            continue;
        }
        if start > cursor {
            segments.push(Segment {
                text: &text[cursor..start],
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: &text[start..end],
            highlighted: true,
        });
        cursor = end;
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: &text[cursor..],
            highlighted: false,
        });
    }
    segments
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
