//! # FXM - First-Match Substring Search
//!
//! FXM finds the first occurrence of a pattern in a text in O(n + m)
//! time using the Knuth-Morris-Pratt algorithm. The text is walked once,
//! left to right, and a per-pattern shift table skips the comparisons a
//! naive scan would repeat, so the scan never backtracks over the text.
//!
//! ## Architecture
//!
//! The crate is organized around one module:
//!
//! - [`matcher`] - Shift table construction and the single-pass scan loop
//!
//! ## Quick Start
//!
//! ```
//! use fxm::matcher::search;
//!
//! let outcome = search("this is a string to be matched", "string");
//! assert!(outcome.matched);
//! assert_eq!((outcome.from_index, outcome.to_index), (10, 15));
//!
//! // Not-found is a normal value, not an error
//! let missing = search("this is a string to be matched", "astring");
//! assert_eq!((missing.from_index, missing.to_index), (-1, -1));
//! ```
//!
//! ## Behavior Notes
//!
//! - Only the first occurrence is ever reported; the scan stops as soon
//!   as a full match completes.
//! - An empty pattern never matches, even against an empty text.
//! - Every input is valid. There is no error path: searching cannot
//!   fail, it can only come back not-found.

pub mod matcher;
