use crate::attributes::Sex;
use crate::region::Region;
use crate::validators::{
    taiwan_sex, validate_hk_card, validate_tw_card, IdCardScheme, Validator, HONG_KONG_PATTERN,
    TAIWAN_PATTERN,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref MACAU_PATTERN: Regex = Regex::new(r"^[157][0-9]{6}\(?[0-9A-Z]\)?$").unwrap();
}

/// Outcome of [`validate_id_card_10`] for a number recognized as a Taiwan, Macau or
/// Hong Kong card.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionalCardInfo {
    pub region: Region,
    pub sex: Sex,
    pub valid: bool,
}

/// First scheme in priority order that accepts `id_number`, after trimming surrounding
/// whitespace.
///
/// Several schemes could structurally apply to the same string; only the first accepting one
/// is reported.
pub fn classify(id_number: &str, current_year: i32) -> Option<IdCardScheme> {
    classify_with(&IdCardScheme::priority_order(), id_number, current_year)
}

pub(crate) fn classify_with(
    schemes: &[IdCardScheme],
    id_number: &str,
    current_year: i32,
) -> Option<IdCardScheme> {
    let id_number = id_number.trim();
    if id_number.is_empty() {
        return None;
    }
    schemes
        .iter()
        .copied()
        .find(|scheme| scheme.is_valid(id_number, current_year))
}

/// Whether any scheme accepts `id_number`.
pub fn validate_any(id_number: &str, current_year: i32) -> bool {
    classify(id_number, current_year).is_some()
}

/// Recognizes 10-character style regional cards (Taiwan, Macau, Hong Kong) and reports
/// region, sex and validity. `None` if the number has none of those shapes.
///
/// Macau numbers have no published checksum, so they are recognized but never valid.
pub fn validate_id_card_10(id_number: &str) -> Option<RegionalCardInfo> {
    let stripped_len = id_number.chars().filter(|c| !matches!(c, '(' | ')')).count();
    if stripped_len != 8 && stripped_len != 9 && id_number.len() != 10 {
        return None;
    }

    if TAIWAN_PATTERN.is_match(id_number) {
        let sex = taiwan_sex(id_number);
        Some(RegionalCardInfo {
            region: Region::Taiwan,
            sex,
            valid: sex != Sex::Unknown && validate_tw_card(id_number),
        })
    } else if MACAU_PATTERN.is_match(id_number) {
        Some(RegionalCardInfo {
            region: Region::Macau,
            sex: Sex::Unknown,
            valid: false,
        })
    } else if HONG_KONG_PATTERN.is_match(id_number) {
        Some(RegionalCardInfo {
            region: Region::HongKong,
            sex: Sex::Unknown,
            valid: validate_hk_card(id_number),
        })
    } else {
        None
    }
}
