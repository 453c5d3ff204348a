//! ISO 7064 MOD 11-2 check character of the 18-character identity number.

use crate::error::IdCardError;

pub const BODY_LENGTH: usize = 17;

/// Weight of each of the 17 body digits, position aligned.
pub const WEIGHTS: [u32; BODY_LENGTH] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check character indexed by `weighted sum % 11`.
pub const CHECK_CHARACTERS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Converts the 17-character body into digits. Anything other than exactly 17 ASCII digits
/// is a format error.
pub fn parse_body(body: &str) -> Result<[u32; BODY_LENGTH], IdCardError> {
    if body.len() != BODY_LENGTH {
        return Err(IdCardError::Format);
    }
    let mut digits = [0; BODY_LENGTH];
    for (slot, c) in digits.iter_mut().zip(body.chars()) {
        *slot = c.to_digit(10).ok_or(IdCardError::Format)?;
    }
    Ok(digits)
}

pub fn compute_check_character(digits: &[u32]) -> Result<char, IdCardError> {
    if digits.len() != WEIGHTS.len() || digits.iter().any(|d| *d > 9) {
        return Err(IdCardError::Format);
    }
    let sum: u32 = digits.iter().zip(WEIGHTS.iter()).map(|(d, w)| d * w).sum();
    Ok(CHECK_CHARACTERS[(sum % 11) as usize])
}

/// `X` and `x` are the same check character.
pub fn validate_check_character(digits: &[u32], candidate: char) -> bool {
    compute_check_character(digits)
        .map(|expected| expected.eq_ignore_ascii_case(&candidate))
        .unwrap_or(false)
}

/// Check character for a 17-character body given as text.
pub fn check_character_for(body: &str) -> Result<char, IdCardError> {
    compute_check_character(&parse_body(body)?)
}
