//! End-to-end integration tests for the sananmuunnos transformation.

use sananmuunnos::prelude::*;

#[test]
fn test_canonical_initial_consonant_pair() {
    assert_eq!(transform("tapaus silta"), Some("sipaus talta".to_string()));
}

#[test]
fn test_initial_consonant_symmetric_heads() {
    assert_eq!(transform("herra pekka"), Some("perra hekka".to_string()));
}

#[test]
fn test_double_vowel_beats_initial_consonant() {
    // "silta" would qualify for initial-consonant, but "kaatua" carries a
    // doubled vowel and the double-vowel rule has priority
    assert_eq!(transform("kaatua silta"), Some("siitua kalta".to_string()));
}

#[test]
fn test_double_vowel_reversed_orientation() {
    // the doubled vowel sits in the first word; dispatch must find the
    // rule in the swapped orientation and restore positional order
    assert_eq!(transform("kaatua mennä"), Some("meetua kanna".to_string()));
}

#[test]
fn test_double_vowel_forward_orientation() {
    assert_eq!(transform("mennä kaatua"), Some("kanna meetua".to_string()));
}

#[test]
fn test_initial_vowel_pair() {
    assert_eq!(transform("ovi kello"), Some("kevi ollo".to_string()));
}

#[test]
fn test_output_positions_follow_input_positions() {
    // same pair, both orders: each input word keeps its slot
    let forward = transform("tapaus silta").unwrap();
    let reversed = transform("silta tapaus").unwrap();
    let fw: Vec<&str> = forward.split(' ').collect();
    let rv: Vec<&str> = reversed.split(' ').collect();
    assert_eq!(fw[0], rv[1]);
    assert_eq!(fw[1], rv[0]);
}

#[test]
fn test_harmony_applies_to_both_words() {
    // "tyttö" drags its front-class onset in front of "kauppa"'s tail and
    // vice versa; both outputs must come out internally consistent
    let result = transform("kauppa tyttö").unwrap();
    for word in result.split(' ') {
        let class = VowelClass::of_word(word);
        if class == VowelClass::Back {
            assert!(!word.contains(['ä', 'ö', 'y']), "disharmony in {word}");
        }
        if class == VowelClass::Front {
            assert!(!word.contains(['a', 'o', 'u']), "disharmony in {word}");
        }
    }
}

#[test]
fn test_single_token_input() {
    assert_eq!(transform("onlyone"), None);
}

#[test]
fn test_three_token_input() {
    assert_eq!(transform("a b c"), None);
}

#[test]
fn test_double_space_input() {
    assert_eq!(transform("kissa  koira"), None);
}

#[test]
fn test_vowelless_pair_does_not_panic() {
    assert_eq!(transform("brr tsk"), None);
    assert_eq!(transform("b t"), None);
}

#[test]
fn test_single_character_words() {
    // "a" triggers the initial-vowel rule even against a one-letter word
    assert_eq!(transform("a b"), Some("b a".to_string()));
}

#[test]
fn test_error_taxonomy() {
    assert_eq!(try_transform("onlyone"), Err(TransformError::InvalidInput));
    assert_eq!(
        try_transform("brr tsk"),
        Err(TransformError::NoTransformation)
    );
}
