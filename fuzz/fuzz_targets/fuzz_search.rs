#![no_main]

use libfuzzer_sys::fuzz_target;

/// Naive reference: first index where pattern occurs in text.
/// Empty patterns never match, mirroring the library's policy.
fn naive_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the pattern length; the rest splits into
    // pattern then text.
    let split = (data[0] as usize).min(data.len() - 1);
    let pattern = &data[1..1 + split];
    let text = &data[1 + split..];

    let outcome = fxm::matcher::search_bytes(text, pattern);
    match naive_find(text, pattern) {
        Some(index) => {
            assert!(outcome.matched);
            assert_eq!(outcome.from_index as usize, index);
            assert_eq!(outcome.to_index as usize, index + pattern.len() - 1);
        }
        None => {
            assert!(!outcome.matched);
            assert_eq!(outcome.from_index, -1);
            assert_eq!(outcome.to_index, -1);
        }
    }
});
