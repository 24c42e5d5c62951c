// src/crypto.rs
use sha1::{Digest, Sha1};
use crate::models::ASCII_PUNCTUATION;

const STRENGTH_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Heuristic strength score in the range 0-100.
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score: u32 = 0;

    if length >= 8 {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| STRENGTH_SPECIALS.contains(c)) {
        score += 10;
    }

    // Length bonuses stack
    if length >= 12 {
        score += 20;
    }
    if length >= 16 {
        score += 20;
    }
    if length >= 20 {
        score += 20;
    }

    score.min(100) as u8
}

/// Entropy estimate in bits based on which character classes appear.
pub fn calculate_entropy(password: &str) -> f64 {
    let mut pool_size: u32 = 0;

    if password.chars().any(|c| c.is_numeric()) {
        pool_size += 10;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        pool_size += 26;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        pool_size += 26;
    }
    if password.chars().any(|c| ASCII_PUNCTUATION.contains(c)) {
        pool_size += ASCII_PUNCTUATION.len() as u32;
    }

    if pool_size == 0 {
        return 0.0;
    }

    let entropy = f64::from(pool_size).log2() * password.chars().count() as f64;
    (entropy * 100.0).round() / 100.0
}

/// Uppercase hex SHA-1 of the password, as used by the range API.
pub fn sha1_hex(password: &str) -> String {
    let digest = Sha1::digest(password.as_bytes());
    hex::encode_upper(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_of_empty_password_is_zero() {
        assert_eq!(analyze_password_strength(""), 0);
    }

    #[test]
    fn strength_scores_classes_and_length() {
        // 8 chars, lower + digit
        assert_eq!(analyze_password_strength("abcd1234"), 30);
        // 12 chars, all four classes
        assert_eq!(analyze_password_strength("Abcdef12345!"), 70);
        // 20 chars, all four classes, capped
        assert_eq!(analyze_password_strength("Abcdefghij123456789!"), 100);
    }

    #[test]
    fn strength_ignores_specials_outside_its_set() {
        assert_eq!(analyze_password_strength("a~"), 10);
        assert_eq!(analyze_password_strength("a?"), 20);
    }

    #[test]
    fn entropy_uses_pool_of_present_classes() {
        assert_eq!(calculate_entropy(""), 0.0);
        // 10 digits, log2(10) * 4 = 13.2877...
        assert_eq!(calculate_entropy("1234"), 13.29);
        // lowercase only: log2(26) * 8 = 37.6035...
        assert_eq!(calculate_entropy("password"), 37.6);
        // all classes: log2(94) * 4 = 26.2172...
        assert_eq!(calculate_entropy("aA1!"), 26.22);
    }

    #[test]
    fn entropy_is_zero_for_unclassified_characters() {
        assert_eq!(calculate_entropy("   "), 0.0);
    }

    #[test]
    fn sha1_matches_known_digest() {
        assert_eq!(
            sha1_hex("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }
}
