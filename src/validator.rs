use crate::calendar::{current_year, MIN_BIRTH_YEAR};
use crate::config::ValidatorConfig;
use crate::error::CreateValidatorError;
use crate::observability::metrics::ValidatorMetrics;
use crate::stats::GLOBAL_STATS;
use crate::validators::{IdCardScheme, Validator};
use std::collections::HashSet;
use tracing::debug;

/// Dispatcher built from a [ValidatorConfig]. It tries the configured schemes in order, and
/// reports the outcome through metrics and debug traces. The identity number itself is never
/// recorded.
pub struct IdCardValidator {
    schemes: Vec<IdCardScheme>,
    current_year: i32,
    metrics: ValidatorMetrics,
}

impl IdCardValidator {
    pub fn new(config: &ValidatorConfig) -> Result<Self, CreateValidatorError> {
        if config.schemes.is_empty() {
            return Err(CreateValidatorError::NoSchemes);
        }
        let mut seen = HashSet::new();
        for scheme in &config.schemes {
            if !seen.insert(*scheme) {
                return Err(CreateValidatorError::DuplicateScheme(*scheme));
            }
        }

        let current_year = config.reference_year.unwrap_or_else(current_year);
        if current_year <= MIN_BIRTH_YEAR {
            return Err(CreateValidatorError::InvalidReferenceYear(current_year));
        }

        GLOBAL_STATS.validator_creations.increment(1);
        Ok(Self {
            schemes: config.schemes.clone(),
            current_year,
            metrics: ValidatorMetrics::new(&config.labels, &config.schemes),
        })
    }

    pub fn schemes(&self) -> &[IdCardScheme] {
        &self.schemes
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// First configured scheme accepting `id_number` (surrounding whitespace ignored).
    pub fn classify(&self, id_number: &str) -> Option<IdCardScheme> {
        let id_number = id_number.trim();
        for scheme in &self.schemes {
            match scheme.check(id_number, self.current_year) {
                Ok(()) => {
                    debug!(%scheme, "identity number accepted");
                    self.metrics.record_accepted(*scheme);
                    return Some(*scheme);
                }
                Err(error) => debug!(%scheme, ?error, "identity number rejected by scheme"),
            }
        }
        self.metrics.rejected.increment(1);
        None
    }

    pub fn validate(&self, id_number: &str) -> bool {
        self.classify(id_number).is_some()
    }
}
