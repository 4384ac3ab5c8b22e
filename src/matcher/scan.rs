//! Scan loop and public search entry points
//!
//! One left-to-right pass over the text. The outer cursor `i` is the
//! candidate match start, the inner cursor `j` counts symbols matched
//! so far; on a mismatch the shift table moves `i` forward and `j`
//! back by the same amount, so `i + j` (the text position under
//! comparison) never decreases and no text symbol is read twice after
//! it has matched.

use memchr::memchr;

use super::table::ShiftTable;
use super::types::SearchOutcome;

/// Find the first occurrence of `pattern` in `text`.
///
/// Returned indices are char offsets: `from_index` is the position of
/// the first matched symbol counting chars from the start of `text`,
/// `to_index` the position of the last. ASCII inputs are scanned
/// directly as bytes; anything else is decoded into symbol arrays up
/// front so every access during the scan stays O(1).
///
/// An empty pattern never matches, even against an empty text.
pub fn search(text: &str, pattern: &str) -> SearchOutcome {
    if text.is_ascii() && pattern.is_ascii() {
        // Byte and char offsets coincide, so the byte path's indices
        // are already correct.
        return search_bytes(text.as_bytes(), pattern.as_bytes());
    }

    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    search_symbols(&text, &pattern)
}

/// True when `pattern` occurs somewhere in `text`.
///
/// Same policy as [`search`]: an empty pattern never matches.
pub fn contains(text: &str, pattern: &str) -> bool {
    search(text, pattern).matched
}

/// Find the first occurrence of `pattern` in `text` over any symbol
/// type. Indices in the outcome count symbols.
pub fn search_symbols<T: Eq + Copy>(text: &[T], pattern: &[T]) -> SearchOutcome {
    if pattern.is_empty() {
        return SearchOutcome::NOT_FOUND;
    }
    let table = ShiftTable::build(pattern);
    scan(text, &table)
}

/// Byte-specialized search.
///
/// Matches [`search_symbols`] over `u8` exactly, with one refinement:
/// while no bytes are matched yet, the scan jumps straight to the next
/// occurrence of the pattern's first byte with `memchr` instead of
/// sliding one position at a time. The skip lands exactly where the
/// one-at-a-time slide would, so first-match semantics and the linear
/// bound are unchanged.
pub fn search_bytes(text: &[u8], pattern: &[u8]) -> SearchOutcome {
    if pattern.is_empty() {
        return SearchOutcome::NOT_FOUND;
    }
    let table = ShiftTable::build(pattern);
    let first = pattern[0];
    let n = text.len();
    let m = pattern.len();

    let mut i = 0;
    let mut j = 0;
    while i + j < n {
        if j == 0 {
            match memchr(first, &text[i..]) {
                Some(offset) => i += offset,
                None => break,
            }
            // The byte at i is a known match of pattern[0].
            j = 1;
            if m == 1 {
                return SearchOutcome::found(i, i);
            }
            continue;
        }

        if text[i + j] == table.entry(j).symbol {
            j += 1;
            if j == m {
                return SearchOutcome::found(i, i + m - 1);
            }
        } else if j == 1 {
            i += 1;
            j = 0;
        } else {
            let shift = table.entry(j - 1).shift;
            i += shift;
            j -= shift;
        }
    }

    SearchOutcome::NOT_FOUND
}

/// Core scan over an already-built table.
fn scan<T: Eq + Copy>(text: &[T], table: &ShiftTable<T>) -> SearchOutcome {
    let n = text.len();
    let m = table.len();
    debug_assert!(m > 0);

    let mut i = 0;
    let mut j = 0;
    while i + j < n {
        if text[i + j] == table.entry(j).symbol {
            j += 1;
            if j == m {
                // First occurrence found; later ones are never
                // reported.
                return SearchOutcome::found(i, i + m - 1);
            }
        } else if j <= 1 {
            // Nothing usable matched: slide the candidate by one.
            i += 1;
            j = 0;
        } else {
            let shift = table.entry(j - 1).shift;
            i += shift;
            j -= shift;
        }
    }

    SearchOutcome::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "this is a string to be matched";

    #[test]
    fn test_match_mid_text() {
        let outcome = search(TEXT, "g to");
        assert_eq!(outcome, SearchOutcome::found(15, 18));
    }

    #[test]
    fn test_match_single_space() {
        // First of many spaces wins
        let outcome = search(TEXT, " ");
        assert_eq!(outcome, SearchOutcome::found(4, 4));
    }

    #[test]
    fn test_match_word() {
        let outcome = search(TEXT, "string");
        assert_eq!(outcome, SearchOutcome::found(10, 15));
    }

    #[test]
    fn test_match_at_start() {
        let outcome = search(TEXT, "this");
        assert_eq!(outcome, SearchOutcome::found(0, 3));
    }

    #[test]
    fn test_match_at_end() {
        let outcome = search(TEXT, "matched");
        assert_eq!(outcome, SearchOutcome::found(23, 29));
    }

    #[test]
    fn test_pattern_absent() {
        let outcome = search(TEXT, "astring");
        assert_eq!(outcome, SearchOutcome::NOT_FOUND);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert_eq!(search(TEXT, ""), SearchOutcome::NOT_FOUND);
        assert_eq!(search("", ""), SearchOutcome::NOT_FOUND);
        assert_eq!(search_bytes(b"abc", b""), SearchOutcome::NOT_FOUND);
        assert_eq!(search_symbols::<u8>(b"abc", b""), SearchOutcome::NOT_FOUND);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(search("", "pattern"), SearchOutcome::NOT_FOUND);
        assert_eq!(search_bytes(b"", b"x"), SearchOutcome::NOT_FOUND);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(search("ab", "abc"), SearchOutcome::NOT_FOUND);
    }

    #[test]
    fn test_partial_match_at_text_end() {
        // A prefix of the pattern runs into the end of the text; the
        // scan must fall out cleanly rather than read past it
        assert_eq!(search("zzab", "abc"), SearchOutcome::NOT_FOUND);
        assert_eq!(search_bytes(b"zzab", b"abc"), SearchOutcome::NOT_FOUND);
    }

    #[test]
    fn test_first_of_overlapping_occurrences() {
        let outcome = search("abab", "ab");
        assert_eq!(outcome, SearchOutcome::found(0, 1));
    }

    #[test]
    fn test_self_overlapping_pattern() {
        // "thisisjustanexample" holds "isis" starting inside an
        // earlier partial match
        let outcome = search("thisisjustanexample", "isis");
        assert_eq!(outcome, SearchOutcome::found(2, 5));
    }

    #[test]
    fn test_shift_past_false_start() {
        // The first four symbols match "ccan" before diverging; the
        // table shifts the candidate straight to index 4
        let outcome = search("ccanccannc", "ccannc");
        assert_eq!(outcome, SearchOutcome::found(4, 9));
    }

    #[test]
    fn test_pattern_equals_text() {
        let outcome = search("ccannc", "ccannc");
        assert_eq!(outcome, SearchOutcome::found(0, 5));
    }

    #[test]
    fn test_char_offsets_for_non_ascii() {
        // Offsets count chars, not bytes
        let outcome = search("na\u{ef}ve caf\u{e9}", "caf\u{e9}");
        assert_eq!(outcome, SearchOutcome::found(6, 9));
    }

    #[test]
    fn test_non_ascii_not_found() {
        assert_eq!(search("na\u{ef}ve", "nai"), SearchOutcome::NOT_FOUND);
    }

    #[test]
    fn test_bytes_with_non_utf8_content() {
        let outcome = search_bytes(b"\x00\xff\xfe\xff\xfe", b"\xfe\xff");
        assert_eq!(outcome, SearchOutcome::found(2, 3));
    }

    #[test]
    fn test_symbols_over_integers() {
        let text = [5u32, 7, 7, 5, 7, 9];
        let pattern = [7u32, 5, 7];
        let outcome = search_symbols(&text, &pattern);
        assert_eq!(outcome, SearchOutcome::found(2, 4));
    }

    #[test]
    fn test_contains() {
        assert!(contains(TEXT, "string"));
        assert!(!contains(TEXT, "astring"));
        assert!(!contains(TEXT, ""));
    }

    #[test]
    fn test_span_length_matches_pattern() {
        for pattern in ["t", "th", "is a", "to be matched"] {
            let outcome = search(TEXT, pattern);
            assert!(outcome.matched);
            assert_eq!(
                (outcome.to_index - outcome.from_index) as usize,
                pattern.chars().count() - 1
            );
        }
    }

    #[test]
    fn test_byte_and_generic_paths_agree() {
        let texts: [&[u8]; 4] = [b"", b"aaaaaaaaab", b"ccanccannc", b"this is a string to be matched"];
        let patterns: [&[u8]; 6] = [b"", b"a", b"ab", b"ccannc", b"aab", b"zzz"];
        for text in texts {
            for pattern in patterns {
                assert_eq!(
                    search_bytes(text, pattern),
                    search_symbols(text, pattern),
                    "text {:?} pattern {:?}",
                    text,
                    pattern
                );
            }
        }
    }
}
