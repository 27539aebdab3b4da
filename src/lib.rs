//! # sananmuunnos
//!
//! Finnish spoonerism ("sananmuunnos") generation with vowel harmony repair.
//!
//! A sananmuunnos swaps the initial sound segments of two words. This crate
//! implements the classic three-rule system: given a pair of words, an
//! ordered set of phonological pattern matchers reassigns their word onsets,
//! and a vowel harmony pass then rewrites each result so its vowels belong
//! consistently to either the back class (a, o, u) or the front class
//! (y, ä, ö).
//!
//! ## Example
//!
//! ```rust,ignore
//! use sananmuunnos::prelude::*;
//!
//! assert_eq!(
//!     transform("tapaus silta"),
//!     Some("sipaus talta".to_string()),
//! );
//! ```
//!
//! Every transformation is a pure function over immutable string values:
//! no global state is touched and calls are safe to issue concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod phonology;
pub mod rules;
pub mod transform;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::phonology::{first_vowel, harmonize, is_vowel, VowelClass, VOWELS};
    pub use crate::rules::{apply_symmetric, first_match, first_match_with_rule, Rule};
    pub use crate::transform::{transform, try_transform, TransformError};
}
