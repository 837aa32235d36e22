use rand::{Rng, distr::Alphanumeric};

/// Characters a random search query may contain.
pub const SEARCH_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789$,.";

/// Length of the opaque anti-CSRF state tokens minted on `/auth`.
const STATE_TOKEN_LENGTH: usize = 32;

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Builds a search query of random length in `[0, max_length]`, each
/// character drawn uniformly from [`SEARCH_ALPHABET`]. The empty string is a
/// legitimate outcome.
pub fn random_string(max_length: usize) -> String {
    let mut rng = rand::rng();
    let length = rng.random_range(0..=max_length);
    (0..length)
        .map(|_| SEARCH_ALPHABET[rng.random_range(0..SEARCH_ALPHABET.len())] as char)
        .collect()
}

pub fn random_offset(max: u32) -> u32 {
    rand::rng().random_range(0..max)
}
