use crate::calendar::{expand_two_digit_year, parse_digits};
use crate::checksum::{check_character_for, parse_body, BODY_LENGTH};
use crate::error::IdCardError;
use crate::region::region_of;

pub const LEGACY_LENGTH: usize = 15;
pub const ID_LENGTH: usize = 18;

/// Upgrades a legacy 15-character number to the 18-character form: the 2-digit birth year
/// is widened to 4 digits and the check character is appended.
///
/// The embedded birth date is not checked here, only that the input is 15 digits starting
/// with a known region code.
pub fn convert_15_to_18(id_number: &str) -> Result<String, IdCardError> {
    if id_number.len() != LEGACY_LENGTH || !id_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdCardError::Format);
    }
    if region_of(id_number).is_none() {
        return Err(IdCardError::Region);
    }
    let two_digit_year = parse_digits(&id_number[6..8]).ok_or(IdCardError::Format)?;

    let mut converted = String::with_capacity(ID_LENGTH);
    converted.push_str(&id_number[..6]);
    converted.push_str(&expand_two_digit_year(two_digit_year).to_string());
    converted.push_str(&id_number[8..]);

    let check = check_character_for(&converted)?;
    converted.push(check);
    Ok(converted)
}

/// Brings a number into its 18-character form so attributes can be read at fixed offsets.
///
/// 18-character input only needs a numeric body and a plausible check character, the
/// checksum itself is not verified.
pub(crate) fn normalize_to_18(id_number: &str) -> Result<String, IdCardError> {
    match id_number.len() {
        ID_LENGTH => {
            let (Some(body), Some(check)) =
                (id_number.get(..BODY_LENGTH), id_number.get(BODY_LENGTH..))
            else {
                return Err(IdCardError::Format);
            };
            parse_body(body)?;
            if !matches!(check.as_bytes(), [b'0'..=b'9' | b'X' | b'x']) {
                return Err(IdCardError::Format);
            }
            Ok(id_number.to_owned())
        }
        LEGACY_LENGTH => convert_15_to_18(id_number),
        _ => Err(IdCardError::Format),
    }
}
