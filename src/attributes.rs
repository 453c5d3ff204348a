//! Attributes derived from a mainland identity number.
//!
//! Each extractor accepts the 18-character form or the legacy 15-character form (upgraded
//! internally) and reads fixed offsets. The input is assumed to be valid already: the
//! checksum is not re-verified, but input that cannot be read at those offsets is an error.

use crate::calendar::parse_digits;
use crate::convert::normalize_to_18;
use crate::error::IdCardError;
use crate::region::{region_of, Region};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

struct BirthFields {
    year: i32,
    month: u32,
    day: u32,
}

fn birth_fields(id_number: &str) -> Result<BirthFields, IdCardError> {
    let normalized = normalize_to_18(id_number)?;
    let field = |range: std::ops::Range<usize>| {
        parse_digits(&normalized[range]).ok_or(IdCardError::Format)
    };
    Ok(BirthFields {
        year: field(6..10)? as i32,
        month: field(10..12)?,
        day: field(12..14)?,
    })
}

/// Birth date as `YYYYMMDD`.
pub fn get_birth_date(id_number: &str) -> Result<String, IdCardError> {
    let normalized = normalize_to_18(id_number)?;
    Ok(normalized[6..14].to_owned())
}

/// Birth date as `YYYY-MM-DD`.
pub fn get_birth_date_iso(id_number: &str) -> Result<String, IdCardError> {
    let normalized = normalize_to_18(id_number)?;
    Ok(format!(
        "{}-{}-{}",
        &normalized[6..10],
        &normalized[10..12],
        &normalized[12..14]
    ))
}

/// Birth date as a calendar date. Fails with [`IdCardError::Date`] if the embedded date does
/// not exist (e.g. February 30th).
pub fn birth_date(id_number: &str) -> Result<NaiveDate, IdCardError> {
    let fields = birth_fields(id_number)?;
    NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day).ok_or(IdCardError::Date)
}

pub fn get_birth_year(id_number: &str) -> Result<i32, IdCardError> {
    birth_fields(id_number).map(|fields| fields.year)
}

pub fn get_birth_month(id_number: &str) -> Result<u32, IdCardError> {
    birth_fields(id_number).map(|fields| fields.month)
}

pub fn get_birth_day(id_number: &str) -> Result<u32, IdCardError> {
    birth_fields(id_number).map(|fields| fields.day)
}

/// `current_year - birth year`. Month and day are ignored.
pub fn get_age(id_number: &str, current_year: i32) -> Result<i32, IdCardError> {
    Ok(current_year - get_birth_year(id_number)?)
}

/// Parity of the 17th character: odd is male, even is female. Anything that cannot be read
/// is [`Sex::Unknown`].
pub fn get_sex(id_number: &str) -> Sex {
    let Ok(normalized) = normalize_to_18(id_number) else {
        return Sex::Unknown;
    };
    match normalized[16..17].chars().next().and_then(|c| c.to_digit(10)) {
        Some(digit) if digit % 2 == 1 => Sex::Male,
        Some(_) => Sex::Female,
        None => Sex::Unknown,
    }
}

pub fn get_region(id_number: &str) -> Result<Region, IdCardError> {
    let normalized = normalize_to_18(id_number)?;
    region_of(&normalized).ok_or(IdCardError::Region)
}
