use crate::error::CreateValidatorError;
use crate::observability::labels::Labels;
use crate::validator::IdCardValidator;
use crate::validators::IdCardScheme;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidatorConfig {
    /// Schemes to try, in order. Defaults to every scheme in priority order.
    #[serde(default = "IdCardScheme::priority_order")]
    pub schemes: Vec<IdCardScheme>,

    /// Year embedded birth dates must precede. Read from the clock when the validator is
    /// built if absent.
    #[serde(default)]
    pub reference_year: Option<i32>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self {
            schemes: IdCardScheme::priority_order(),
            reference_year: None,
            labels: Labels::empty(),
        }
    }

    pub fn schemes(&self, schemes: Vec<IdCardScheme>) -> Self {
        self.mutate_clone(|x| x.schemes = schemes)
    }

    pub fn reference_year(&self, reference_year: i32) -> Self {
        self.mutate_clone(|x| x.reference_year = Some(reference_year))
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Result<IdCardValidator, CreateValidatorError> {
        IdCardValidator::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
