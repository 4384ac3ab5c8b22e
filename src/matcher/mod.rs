//! First-match substring search
//!
//! This module implements exact first-occurrence substring search in
//! O(n + m) time using the Knuth-Morris-Pratt algorithm. A shift table
//! built once per pattern tells the scan how far to slide on a mismatch
//! without re-comparing symbols already known to match.
//!
//! ## Architecture
//!
//! - `types`: table entries and the search outcome
//! - `table`: per-pattern shift table construction
//! - `scan`: the single-pass scan loop and the public entry points
//!
//! The table is scratch state local to one search call. It is built,
//! used for a single left-to-right pass, and dropped; nothing is cached
//! or shared across calls, so searches are freely callable from any
//! number of threads.

pub mod scan;
pub mod table;
pub mod types;

// Re-exports for convenience
pub use scan::{contains, search, search_bytes, search_symbols};
pub use table::ShiftTable;
pub use types::{SearchOutcome, TableEntry};
