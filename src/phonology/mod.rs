//! Finnish character classification and vowel harmony.
//!
//! This module provides the value-level phonology the rule matchers are
//! built on:
//!
//! - [`is_vowel`] / [`first_vowel`] - membership tests against the fixed
//!   eight-vowel Finnish set
//! - [`VowelClass`] - the back/front harmony classes
//! - [`harmonize`] - the vowel harmony repair pass applied to transformed
//!   words
//!
//! All functions operate on Unicode characters, never bytes: ä and ö are
//! multi-byte in UTF-8, so byte indexing would split them.

pub mod harmony;
pub mod vowels;

pub use harmony::{harmonize, VowelClass};
pub use vowels::{first_vowel, is_vowel, VOWELS};
