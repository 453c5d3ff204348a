use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of multiple [Label] providing some methods to easily clone and adds new labels in it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn empty() -> Self {
        Labels::default()
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        Labels::empty().clone_with_labels(labels)
    }

    /// Clone the actual [Labels] with additional key-value labels. An additional label
    /// replaces an existing one with the same key.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(
            additional_labels
                .iter()
                .cloned()
                .map(|(key, value)| (key.into(), value.into())),
        );
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}
