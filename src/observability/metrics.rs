use crate::observability::labels::Labels;
use crate::validators::IdCardScheme;
use metrics::{counter, Counter};
use std::collections::HashMap;

const SCHEME: &str = "scheme";

pub struct ValidatorMetrics {
    accepted: HashMap<IdCardScheme, Counter>,
    /// Numbers no enabled scheme accepted
    pub rejected: Counter,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels, schemes: &[IdCardScheme]) -> Self {
        ValidatorMetrics {
            accepted: schemes
                .iter()
                .map(|scheme| {
                    let scheme_labels = labels.clone_with_labels(&[(SCHEME, scheme.to_string())]);
                    (*scheme, counter!("id_card.accepted", scheme_labels))
                })
                .collect(),
            rejected: counter!("id_card.rejected", labels.clone()),
        }
    }

    pub fn record_accepted(&self, scheme: IdCardScheme) {
        if let Some(accepted) = self.accepted.get(&scheme) {
            accepted.increment(1);
        }
    }
}
