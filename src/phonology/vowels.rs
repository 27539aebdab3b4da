//! Character classification for Finnish phonology.
//!
//! The classifier is deliberately binary: a character is either a member of
//! the fixed Finnish vowel set or it is treated as consonant-class for
//! matching purposes. No case folding is performed anywhere; callers are
//! expected to pass lowercase input.

/// The Finnish vowel set.
///
/// Membership here is what every matcher and the harmony pass test against.
/// Everything outside this set (including uppercase letters and
/// non-alphabetic characters) is consonant-class.
pub const VOWELS: [char; 8] = ['a', 'e', 'i', 'o', 'u', 'y', 'ä', 'ö'];

/// Check if a character is a Finnish vowel.
///
/// Case-sensitive: `'A'` is not a vowel to this classifier.
///
/// # Examples
///
/// ```rust,ignore
/// use sananmuunnos::phonology::is_vowel;
///
/// assert!(is_vowel('ä'));
/// assert!(!is_vowel('k'));
/// assert!(!is_vowel('A'));
/// ```
#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ä' | 'ö')
}

/// Position of the first vowel in a word, as a character index.
///
/// Returns `None` for a word with no vowel at all; matchers treat that as
/// a non-match rather than an error.
#[inline]
pub fn first_vowel(word: &str) -> Option<usize> {
    word.chars().position(is_vowel)
}
