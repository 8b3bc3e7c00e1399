//! Public share token generation.
//!
//! A share token is the opaque identifier embedded in a guest's shareable
//! status-page link. It only needs to be URL-safe and unlikely to collide;
//! it is not a security boundary beyond casual link-sharing, and holders
//! can read and cancel the entry it names.

use rand::Rng;

/// Token length in characters.
const TOKEN_LEN: usize = 24;

/// Lowercase base-36 alphabet keeps tokens URL-safe and case-insensitive.
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh share token.
///
/// Collisions are astronomically unlikely at this length; the database
/// unique constraint on `share_token` is the only guard.
pub fn generate_share_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_expected_length() {
        assert_eq!(generate_share_token().len(), TOKEN_LEN);
    }

    #[test]
    fn token_uses_only_url_safe_characters() {
        let token = generate_share_token();
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn consecutive_tokens_differ() {
        // Not a statistical test, just a sanity check that the generator
        // is not returning a constant.
        let a = generate_share_token();
        let b = generate_share_token();
        assert_ne!(a, b);
    }
}
