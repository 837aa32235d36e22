use std::collections::HashSet;

use randplay::utils::{SEARCH_ALPHABET, generate_state_token, random_offset, random_string};

#[test]
fn test_generate_state_token() {
    let token = generate_state_token();

    // Should be exactly 32 characters
    assert_eq!(token.len(), 32);

    // Should contain only alphanumeric characters
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let token2 = generate_state_token();
    assert_ne!(token, token2);
}

#[test]
fn test_random_string_length_bounds() {
    // Length must stay in [0, max] for every draw
    for _ in 0..200 {
        let query = random_string(5);
        assert!(query.chars().count() <= 5);
    }
}

#[test]
fn test_random_string_alphabet() {
    let alphabet: HashSet<char> = SEARCH_ALPHABET.iter().map(|&b| b as char).collect();

    for _ in 0..200 {
        for c in random_string(16).chars() {
            assert!(alphabet.contains(&c), "unexpected character {:?}", c);
        }
    }
}

#[test]
fn test_random_string_zero_max_length() {
    // A zero maximum can only yield the empty string
    assert!(random_string(0).is_empty());
}

#[test]
fn test_random_string_can_be_empty() {
    // The empty query is a legitimate outcome, not an error
    let produced_empty = (0..500).any(|_| random_string(1).is_empty());
    assert!(produced_empty);
}

#[test]
fn test_random_offset_bounds() {
    for _ in 0..200 {
        assert!(random_offset(500) < 500);
    }
}
