use crate::attributes::Sex;
use crate::error::IdCardError;
use crate::validators::{weighted_digit_sum, Validator};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Numeric value of the leading letter. The order follows the issuing authority's numbering,
/// which appended I, O and W after the original alphabet, so it is not a plain `A = 10` scheme.
pub const TAIWAN_LETTER_CODES: [(char, u32); 26] = [
    ('A', 10),
    ('B', 11),
    ('C', 12),
    ('D', 13),
    ('E', 14),
    ('F', 15),
    ('G', 16),
    ('H', 17),
    ('J', 18),
    ('K', 19),
    ('L', 20),
    ('M', 21),
    ('N', 22),
    ('P', 23),
    ('Q', 24),
    ('R', 25),
    ('S', 26),
    ('T', 27),
    ('U', 28),
    ('V', 29),
    ('X', 30),
    ('Y', 31),
    ('W', 32),
    ('Z', 33),
    ('I', 34),
    ('O', 35),
];

lazy_static! {
    static ref LETTER_CODES: HashMap<char, u32> = HashMap::from(TAIWAN_LETTER_CODES);
    pub(crate) static ref TAIWAN_PATTERN: Regex = Regex::new("^[a-zA-Z][0-9]{9}$").unwrap();
}

pub struct TaiwanId;

impl Validator for TaiwanId {
    fn check(&self, id_number: &str, _current_year: i32) -> Result<(), IdCardError> {
        if !TAIWAN_PATTERN.is_match(id_number) {
            return Err(IdCardError::Format);
        }
        let letter = id_number
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or(IdCardError::Format)?;
        let letter_value = *LETTER_CODES.get(&letter).ok_or(IdCardError::Format)?;

        // the two digits of the letter value are weighted 1 and 9, the body 8 down to 1
        let body_sum =
            weighted_digit_sum(&id_number[1..9], (1..=8).rev()).ok_or(IdCardError::Format)?;
        let sum = letter_value / 10 + (letter_value % 10) * 9 + body_sum;
        let expected = (10 - sum % 10) % 10;

        match id_number[9..].chars().next().and_then(|c| c.to_digit(10)) {
            Some(check) if check == expected => Ok(()),
            Some(_) => Err(IdCardError::Checksum),
            None => Err(IdCardError::Format),
        }
    }
}

/// Sex digit in second position: `1` male, `2` female.
pub(crate) fn taiwan_sex(id_number: &str) -> Sex {
    match id_number.as_bytes().get(1) {
        Some(b'1') => Sex::Male,
        Some(b'2') => Sex::Female,
        _ => Sex::Unknown,
    }
}

pub fn validate_tw_card(id_number: &str) -> bool {
    TaiwanId.is_valid(id_number, 0)
}
