//! Random short code generation.

use rand::Rng;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Unambiguous alphanumeric alphabet: no `0`/`O`, no `1`/`l`/`I`.
const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generates a random 6-character short code.
///
/// Codes are drawn from an unambiguous alphanumeric alphabet so they survive
/// being read aloud or copied by hand. Uniqueness is enforced by the caller
/// (availability check plus the store's unique constraint), not here.
///
/// # Examples
///
/// ```
/// use neolink::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
