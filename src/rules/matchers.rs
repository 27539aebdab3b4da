//! The three sananmuunnos pattern matchers.
//!
//! Each matcher has the signature
//! `fn(word1: &str, word2: &str) -> Option<(String, String)>`: it tests its
//! own triggering condition and, on match, computes the swapped pair. A
//! matcher never panics on degenerate input; a missing vowel or a too-short
//! word is a non-match, not an error.
//!
//! All indexing is over Unicode characters. Segment extraction is forgiving
//! the way the matchers need it to be: asking for the first two characters
//! of a one-character word yields that one character, and a tail starting
//! past the end of a word is empty.

use crate::phonology::{first_vowel, is_vowel};

/// First `n` characters of `chars`, or all of them if the word is shorter.
fn head(chars: &[char], n: usize) -> String {
    chars[..n.min(chars.len())].iter().collect()
}

/// Characters of `chars` from index `n` on, empty if the word is shorter.
fn tail(chars: &[char], n: usize) -> String {
    chars[n.min(chars.len())..].iter().collect()
}

/// The double-vowel rule.
///
/// Triggers when `word2` begins with an optional single consonant followed
/// by two identical vowels ("kaatua", "aapinen"). The rule swaps the
/// onset-plus-first-vowel segments between the words while keeping the
/// vowel doubling on whichever onset now precedes it:
///
/// - `transformed1` = word2 up to and including its first vowel, then
///   word1 after its first vowel
/// - `transformed2` = word1 up to and including its first vowel, that vowel
///   duplicated, then word2 after its doubled vowel pair
///
/// Requires a vowel somewhere in `word1`; without one there is no segment
/// boundary and the rule reports no match.
pub fn double_vowel(word1: &str, word2: &str) -> Option<(String, String)> {
    let w2: Vec<char> = word2.chars().collect();
    let doubled = match w2.as_slice() {
        [a, b, ..] if is_vowel(*a) && a == b => true,
        [c, a, b, ..] if !is_vowel(*c) && is_vowel(*a) && a == b => true,
        _ => false,
    };
    if !doubled {
        return None;
    }
    let v1 = first_vowel(word1)?;
    let v2 = first_vowel(word2)?;
    let w1: Vec<char> = word1.chars().collect();

    let mut transformed1 = head(&w2, v2 + 1);
    transformed1.push_str(&tail(&w1, v1 + 1));

    let mut transformed2 = head(&w1, v1 + 1);
    transformed2.push(w1[v1]);
    transformed2.push_str(&tail(&w2, v2 + 2));

    Some((transformed1, transformed2))
}

/// The initial-vowel rule.
///
/// Triggers when `word1` begins with a vowel. The two-character head of
/// `word2` replaces word1's single leading vowel, and that vowel takes
/// word2's head position:
///
/// - `transformed1` = first two characters of word2, then word1 from
///   index 1
/// - `transformed2` = first character of word1, then word2 from index 2
pub fn initial_vowel(word1: &str, word2: &str) -> Option<(String, String)> {
    let mut rest1 = word1.chars();
    let leading = rest1.next().filter(|c| is_vowel(*c))?;
    let w2: Vec<char> = word2.chars().collect();

    let mut transformed1 = head(&w2, 2);
    transformed1.push_str(rest1.as_str());

    let mut transformed2 = String::from(leading);
    transformed2.push_str(&tail(&w2, 2));

    Some((transformed1, transformed2))
}

/// The initial-consonant rule.
///
/// Triggers when `word1` begins with one consonant, then a vowel, then a
/// third character different from that vowel (a doubled vowel belongs to
/// the double-vowel rule and must not match here). Two-character heads are
/// swapped symmetrically:
///
/// - `transformed1` = first two characters of word2, then word1 from
///   index 2
/// - `transformed2` = first two characters of word1, then word2 from
///   index 2
pub fn initial_consonant(word1: &str, word2: &str) -> Option<(String, String)> {
    let w1: Vec<char> = word1.chars().collect();
    match w1.as_slice() {
        [c, v, x, ..] if !is_vowel(*c) && is_vowel(*v) && x != v => {}
        _ => return None,
    }
    let w2: Vec<char> = word2.chars().collect();

    let mut transformed1 = head(&w2, 2);
    transformed1.push_str(&tail(&w1, 2));

    let mut transformed2 = head(&w1, 2);
    transformed2.push_str(&tail(&w2, 2));

    Some((transformed1, transformed2))
}
