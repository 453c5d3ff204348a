use crate::calendar::{expand_two_digit_year, is_legal_past_date, parse_digits};
use crate::convert::LEGACY_LENGTH;
use crate::error::IdCardError;
use crate::region::region_of;
use crate::validators::Validator;

/// Legacy 15-character number: 6-digit region, `YYMMDD` birth date and a 3-digit sequence.
/// It carries no check character, so the region and the birth date are the only gates.
pub struct MainlandId15;

impl Validator for MainlandId15 {
    fn check(&self, id_number: &str, current_year: i32) -> Result<(), IdCardError> {
        if id_number.len() != LEGACY_LENGTH || !id_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdCardError::Format);
        }
        if region_of(id_number).is_none() {
            return Err(IdCardError::Region);
        }

        let field = |range: std::ops::Range<usize>| parse_digits(&id_number[range]);
        let (Some(year), Some(month), Some(day)) = (field(6..8), field(8..10), field(10..12))
        else {
            return Err(IdCardError::Format);
        };
        if !is_legal_past_date(expand_two_digit_year(year), month, day, current_year) {
            return Err(IdCardError::Date);
        }
        Ok(())
    }
}

pub fn validate_15(id_number: &str, current_year: i32) -> bool {
    MainlandId15.is_valid(id_number, current_year)
}
