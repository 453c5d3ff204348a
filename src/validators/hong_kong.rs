use crate::error::IdCardError;
use crate::validators::{weighted_digit_sum, Validator};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Alphabet position of the prefix letters that are accepted. Letters missing from the table
/// are rejected.
pub const HONG_KONG_LETTER_CODES: [(char, u32); 10] = [
    ('A', 1),
    ('B', 2),
    ('C', 3),
    ('R', 18),
    ('U', 21),
    ('Z', 26),
    ('X', 24),
    ('W', 23),
    ('O', 15),
    ('N', 14),
];

/// Offset turning an alphabet position into the checksum value of the letter (`A` = 10).
const LETTER_VALUE_OFFSET: u32 = 9;

/// Contribution of the blank first letter of a single-letter number (`58 * 9`).
const SINGLE_LETTER_PREFIX: u32 = 522;

lazy_static! {
    static ref LETTER_CODES: HashMap<char, u32> = HashMap::from(HONG_KONG_LETTER_CODES);
    pub(crate) static ref HONG_KONG_PATTERN: Regex =
        Regex::new(r"^[A-Z]{1,2}[0-9]{6}\(?[0-9A]\)?$").unwrap();
}

fn letter_value(letter: char) -> Result<u32, IdCardError> {
    LETTER_CODES
        .get(&letter)
        .map(|position| position + LETTER_VALUE_OFFSET)
        .ok_or(IdCardError::Format)
}

/// Hong Kong number: one or two letters, six digits and a check character (digit or `A`),
/// usually written in parentheses. The weighted sum of all characters must be divisible by 11.
pub struct HongKongId;

impl Validator for HongKongId {
    fn check(&self, id_number: &str, _current_year: i32) -> Result<(), IdCardError> {
        if !HONG_KONG_PATTERN.is_match(id_number) {
            return Err(IdCardError::Format);
        }
        let card: String = id_number.chars().filter(|c| !matches!(c, '(' | ')')).collect();
        let letter_count = card.chars().take_while(|c| c.is_ascii_uppercase()).count();

        let letters: Vec<char> = card[..letter_count].chars().collect();
        let prefix_sum = match letters.as_slice() {
            [letter] => SINGLE_LETTER_PREFIX + letter_value(*letter)? * 8,
            [first, second] => letter_value(*first)? * 9 + letter_value(*second)? * 8,
            _ => return Err(IdCardError::Format),
        };
        let digits = &card[letter_count..letter_count + 6];
        let body_sum = weighted_digit_sum(digits, (2..=7).rev()).ok_or(IdCardError::Format)?;
        let check = match &card[letter_count + 6..] {
            "A" => 10,
            other => other
                .chars()
                .next()
                .and_then(|c| c.to_digit(10))
                .ok_or(IdCardError::Format)?,
        };

        if (prefix_sum + body_sum + check) % 11 == 0 {
            Ok(())
        } else {
            Err(IdCardError::Checksum)
        }
    }
}

pub fn validate_hk_card(id_number: &str) -> bool {
    HongKongId.is_valid(id_number, 0)
}
