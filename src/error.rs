use crate::validators::IdCardScheme;
use thiserror::Error;

/// Reason an identity number was rejected, or why an attribute could not be extracted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdCardError {
    #[error("The identity number does not match the expected length or character set")]
    Format,

    #[error("The check character does not match the one computed from the body")]
    Checksum,

    #[error("The embedded birth date is not a legal past date")]
    Date,

    #[error("The region prefix is not a known region code")]
    Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateValidatorError {
    #[error("At least one identity number scheme must be enabled")]
    NoSchemes,

    #[error("The scheme {0} is listed more than once")]
    DuplicateScheme(IdCardScheme),

    /// No birth year can be legal if the reference year is not after the 1930 floor.
    #[error("The reference year {0} is not after the minimum birth year")]
    InvalidReferenceYear(i32),
}

