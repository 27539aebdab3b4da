//! Phonological pattern matchers and rule dispatch.
//!
//! A sananmuunnos is produced by exactly one of three rules, tried in a
//! fixed priority order:
//!
//! 1. [`double_vowel`] - the second word opens with a doubled vowel
//!    (optionally after one consonant)
//! 2. [`initial_vowel`] - the first word opens with a vowel
//! 3. [`initial_consonant`] - the first word opens with a consonant and a
//!    single (non-doubled) vowel
//!
//! Each matcher inspects only the shape of its trigger word, so a pair that
//! qualifies only with the words reversed must still be found: dispatch
//! wraps every matcher in [`apply_symmetric`], which retries with the
//! arguments swapped and swaps the result back into input order.

pub mod dispatch;
pub mod matchers;

pub use dispatch::{apply_symmetric, first_match, first_match_with_rule, Matcher, Rule};
pub use matchers::{double_vowel, initial_consonant, initial_vowel};
