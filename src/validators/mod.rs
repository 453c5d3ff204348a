mod hong_kong;
mod mainland_15;
mod mainland_18;
mod taiwan;

pub use crate::validators::hong_kong::{validate_hk_card, HongKongId, HONG_KONG_LETTER_CODES};
pub use crate::validators::mainland_15::{validate_15, MainlandId15};
pub use crate::validators::mainland_18::{validate_18, MainlandId18};
pub use crate::validators::taiwan::{validate_tw_card, TaiwanId, TAIWAN_LETTER_CODES};
pub(crate) use crate::validators::hong_kong::HONG_KONG_PATTERN;
pub(crate) use crate::validators::taiwan::{taiwan_sex, TAIWAN_PATTERN};

use crate::error::IdCardError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A single identity number scheme.
pub trait Validator: Send + Sync {
    /// `Ok` if `id_number` is a valid number of this scheme, otherwise the first reason it
    /// was rejected. `current_year` bounds embedded birth dates.
    fn check(&self, id_number: &str, current_year: i32) -> Result<(), IdCardError>;

    fn is_valid(&self, id_number: &str, current_year: i32) -> bool {
        self.check(id_number, current_year).is_ok()
    }
}

/// The identity number schemes, declared in the order the dispatcher tries them.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    IntoStaticStr,
    EnumIter,
)]
#[serde(tag = "type")]
pub enum IdCardScheme {
    /// 18-character mainland number with a MOD 11-2 check character.
    #[strum(serialize = "mainland_18")]
    Mainland18,
    /// Legacy 15-character mainland number with a 2-digit birth year.
    #[strum(serialize = "mainland_15")]
    Mainland15,
    /// 10-character Taiwan number, one letter followed by nine digits.
    #[strum(serialize = "taiwan")]
    Taiwan,
    /// Hong Kong number, one or two letters, six digits and a check character.
    #[strum(serialize = "hong_kong")]
    HongKong,
}

impl IdCardScheme {
    pub fn priority_order() -> Vec<IdCardScheme> {
        IdCardScheme::iter().collect()
    }
}

impl Validator for IdCardScheme {
    fn check(&self, id_number: &str, current_year: i32) -> Result<(), IdCardError> {
        match self {
            IdCardScheme::Mainland18 => MainlandId18.check(id_number, current_year),
            IdCardScheme::Mainland15 => MainlandId15.check(id_number, current_year),
            IdCardScheme::Taiwan => TaiwanId.check(id_number, current_year),
            IdCardScheme::HongKong => HongKongId.check(id_number, current_year),
        }
    }
}

/// Sums `digit * weight` over the ASCII digits of `digits`, pairing them with the weights in
/// order. `None` if a character is not a digit.
pub(crate) fn weighted_digit_sum(digits: &str, weights: impl Iterator<Item = u32>) -> Option<u32> {
    digits
        .chars()
        .zip(weights)
        .map(|(c, w)| c.to_digit(10).map(|d| d * w))
        .sum()
}
