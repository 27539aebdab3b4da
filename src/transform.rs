//! Top-level sananmuunnos transformation.
//!
//! Ties the pieces together: split the input into exactly two words, run
//! the rule dispatch, repair vowel harmony on each transformed word, join
//! with a single space. Every failure mode is recoverable and surfaced as
//! an absent result; nothing in this module panics on malformed input.

use thiserror::Error;

use crate::phonology::harmonize;
use crate::rules::first_match;

/// Why a transformation produced no result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The input did not split into exactly two space-separated words.
    #[error("expected exactly two space-separated words")]
    InvalidInput,

    /// No rule matched the word pair in either word order.
    #[error("no transformation rule matched the word pair")]
    NoTransformation,
}

/// A specialized `Result` type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Make a sananmuunnos out of a two-word input, reporting why it failed.
///
/// The input must contain exactly two words separated by a single space;
/// consecutive spaces produce empty tokens and are rejected as
/// [`TransformError::InvalidInput`]. The words are expected to be
/// lowercase Finnish; no case folding or alphabet validation is performed.
///
/// # Examples
///
/// ```rust,ignore
/// use sananmuunnos::transform::try_transform;
///
/// assert_eq!(try_transform("tapaus silta").unwrap(), "sipaus talta");
/// ```
pub fn try_transform(input: &str) -> Result<String> {
    let mut tokens = input.split(' ');
    let (Some(word1), Some(word2), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(TransformError::InvalidInput);
    };
    let (transformed1, transformed2) =
        first_match(word1, word2).ok_or(TransformError::NoTransformation)?;
    Ok(format!(
        "{} {}",
        harmonize(&transformed1),
        harmonize(&transformed2)
    ))
}

/// Make a sananmuunnos out of a two-word input.
///
/// Convenience form of [`try_transform`] collapsing both failure modes
/// into `None`.
pub fn transform(input: &str) -> Option<String> {
    try_transform(input).ok()
}
