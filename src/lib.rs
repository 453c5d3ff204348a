// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod attributes;
mod calendar;
mod checksum;
mod config;
mod convert;
mod dispatch;
mod error;
mod observability;
mod region;
mod stats;
mod validator;
mod validators;

// This is the public API of the identity number library
pub use attributes::{
    birth_date, get_age, get_birth_date, get_birth_date_iso, get_birth_day, get_birth_month,
    get_birth_year, get_region, get_sex, Sex,
};
pub use calendar::{
    current_year, days_in_month, expand_two_digit_year, is_leap_year, is_legal_past_date,
    LEGACY_CENTURY, MIN_BIRTH_YEAR,
};
pub use checksum::{
    check_character_for, compute_check_character, parse_body, validate_check_character,
    CHECK_CHARACTERS, WEIGHTS,
};
pub use config::ValidatorConfig;
pub use convert::{convert_15_to_18, ID_LENGTH, LEGACY_LENGTH};
pub use dispatch::{classify, validate_any, validate_id_card_10, RegionalCardInfo};
pub use error::{CreateValidatorError, IdCardError};
pub use observability::labels::Labels;
pub use region::{lookup_region, Region};
pub use validator::IdCardValidator;
pub use validators::{
    validate_15, validate_18, validate_hk_card, validate_tw_card, HongKongId, IdCardScheme,
    MainlandId15, MainlandId18, TaiwanId, Validator, HONG_KONG_LETTER_CODES, TAIWAN_LETTER_CODES,
};
