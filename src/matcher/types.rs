//! Types for first-match substring search.

use std::ops::Range;

/// One slot of a shift table.
///
/// The pattern symbol is cached next to its shift value so the scan
/// reads both from a single array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry<T> {
    /// Pattern symbol at this position
    pub symbol: T,
    /// Positions the candidate start advances (and the match length
    /// retreats) when a mismatch lands just past this entry
    pub shift: usize,
}

/// Result of a first-match search.
///
/// Indices count symbols from the start of the text: byte offsets from
/// [`search_bytes`](super::scan::search_bytes), char offsets from
/// [`search`](super::scan::search). Both are `-1` when `matched` is
/// false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the pattern was found in the text
    pub matched: bool,
    /// Index of the first symbol of the match, or -1
    pub from_index: i64,
    /// Index of the last symbol of the match, or -1
    pub to_index: i64,
}

impl SearchOutcome {
    /// The not-found outcome.
    ///
    /// Both indices are -1 regardless of how far a partial match
    /// progressed before the scan ran out of text.
    pub const NOT_FOUND: Self = Self {
        matched: false,
        from_index: -1,
        to_index: -1,
    };

    /// Outcome for a match spanning `from..=to`.
    #[inline]
    pub(crate) fn found(from: usize, to: usize) -> Self {
        Self {
            matched: true,
            from_index: from as i64,
            to_index: to as i64,
        }
    }

    /// Matched span as a half-open range, or `None` when unmatched.
    pub fn range(&self) -> Option<Range<usize>> {
        if self.matched {
            Some(self.from_index as usize..self.to_index as usize + 1)
        } else {
            None
        }
    }
}
