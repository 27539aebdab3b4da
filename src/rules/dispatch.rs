//! Rule priority and order-symmetric dispatch.
//!
//! The matchers in [`super::matchers`] are order-sensitive: each one tests
//! only the shape of a designated trigger word. Dispatch closes that
//! asymmetry with [`apply_symmetric`] and fixes the rule priority with
//! [`Rule::PRIORITY`]; the first rule to succeed in either orientation
//! wins and later rules are never consulted.

use super::matchers::{double_vowel, initial_consonant, initial_vowel};

/// An order-sensitive pattern matcher over a word pair.
pub type Matcher = fn(&str, &str) -> Option<(String, String)>;

/// The three sananmuunnos rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Word2 opens with an optionally consonant-prefixed doubled vowel
    DoubleVowel,
    /// Word1 opens with a vowel
    InitialVowel,
    /// Word1 opens with a consonant and a single vowel
    InitialConsonant,
}

impl Rule {
    /// Rules in evaluation order. First match wins.
    pub const PRIORITY: [Rule; 3] = [Rule::DoubleVowel, Rule::InitialVowel, Rule::InitialConsonant];

    /// The matcher function implementing this rule.
    pub fn matcher(self) -> Matcher {
        match self {
            Rule::DoubleVowel => double_vowel,
            Rule::InitialVowel => initial_vowel,
            Rule::InitialConsonant => initial_consonant,
        }
    }

    /// Apply this rule in the given word order only.
    pub fn apply(self, word1: &str, word2: &str) -> Option<(String, String)> {
        (self.matcher())(word1, word2)
    }

    /// Human-readable rule name.
    pub fn name(self) -> &'static str {
        match self {
            Rule::DoubleVowel => "double vowel",
            Rule::InitialVowel => "initial vowel",
            Rule::InitialConsonant => "initial consonant",
        }
    }
}

/// Close an order-sensitive matcher over word order.
///
/// Tries `matcher(word1, word2)` first. If that fails, tries the swapped
/// order and, on success, swaps the two results back so that output
/// positions still correspond to the input positions.
///
/// # Examples
///
/// ```rust,ignore
/// use sananmuunnos::rules::{apply_symmetric, initial_vowel};
///
/// // "appi" triggers the rule only as word1; the pair is still found
/// // with "appi" supplied second, and "silta" keeps its slot.
/// let (t1, t2) = apply_symmetric(initial_vowel, "silta", "appi").unwrap();
/// assert_eq!(t2, "sippi");
/// ```
pub fn apply_symmetric(matcher: Matcher, word1: &str, word2: &str) -> Option<(String, String)> {
    matcher(word1, word2)
        .or_else(|| matcher(word2, word1).map(|(t1, t2)| (t2, t1)))
}

/// Run the rules in priority order, order-symmetrically, returning the
/// first successful transformation.
pub fn first_match(word1: &str, word2: &str) -> Option<(String, String)> {
    first_match_with_rule(word1, word2).map(|(_, pair)| pair)
}

/// Like [`first_match`], but also reports which rule produced the result.
pub fn first_match_with_rule(word1: &str, word2: &str) -> Option<(Rule, (String, String))> {
    Rule::PRIORITY.iter().find_map(|&rule| {
        apply_symmetric(rule.matcher(), word1, word2).map(|pair| (rule, pair))
    })
}
