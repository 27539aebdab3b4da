//! Vowel harmony normalization.
//!
//! Finnish vowel harmony requires a word's vowels to belong consistently to
//! either the back class (a, o, u) or the front class (y, ä, ö); e and i are
//! neutral and may appear in any word. Swapping word onsets routinely breaks
//! harmony - the swapped segment can carry a vowel from the other word's
//! class - so every transformed word gets a repair pass before it is
//! returned.
//!
//! The pass classifies a word by its *first* vowel only and rewrites every
//! vowel of the opposite class, anywhere in the word. Words whose first
//! vowel is neutral, and words with no vowel at all, are left untouched.

use super::vowels::first_vowel;

/// The harmony class of a word, determined by its first vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelClass {
    /// Back vowels: a, o, u
    Back,
    /// Front vowels: y, ä, ö
    Front,
    /// First vowel is e or i, or the word has no vowel
    Neutral,
}

impl VowelClass {
    /// Classify a word by its first vowel.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use sananmuunnos::phonology::VowelClass;
    ///
    /// assert_eq!(VowelClass::of_word("tupa"), VowelClass::Back);
    /// assert_eq!(VowelClass::of_word("kyörä"), VowelClass::Front);
    /// assert_eq!(VowelClass::of_word("silta"), VowelClass::Neutral);
    /// ```
    pub fn of_word(word: &str) -> VowelClass {
        match first_vowel(word).and_then(|i| word.chars().nth(i)) {
            Some('a' | 'o' | 'u') => VowelClass::Back,
            Some('y' | 'ä' | 'ö') => VowelClass::Front,
            _ => VowelClass::Neutral,
        }
    }
}

/// Rewrite a word so its vowels comply with Finnish vowel harmony.
///
/// If the first vowel is back-class, every ä, ö and y becomes a, o and u;
/// if front-class, every u, a and o becomes y, ä and ö. A word classified
/// [`VowelClass::Neutral`] is returned unchanged. The pass is idempotent:
/// rewriting never changes the class of the first vowel.
pub fn harmonize(word: &str) -> String {
    match VowelClass::of_word(word) {
        VowelClass::Back => word
            .chars()
            .map(|c| match c {
                'ä' => 'a',
                'ö' => 'o',
                'y' => 'u',
                other => other,
            })
            .collect(),
        VowelClass::Front => word
            .chars()
            .map(|c| match c {
                'u' => 'y',
                'a' => 'ä',
                'o' => 'ö',
                other => other,
            })
            .collect(),
        VowelClass::Neutral => word.to_string(),
    }
}
