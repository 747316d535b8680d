//! Display labels for manifest dependency categories

use std::collections::HashMap;

/// Built-in labels for the categories a package.json can carry
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("dependencies", "Dependencies"),
    ("devDependencies", "Dev Dependencies"),
    ("peerDependencies", "Peer Dependencies"),
    ("optionalDependencies", "Optional Dependencies"),
    ("bundledDependencies", "Bundled Dependencies"),
];

/// Lookup from category key to the label shown to the operator
#[derive(Debug, Clone, Default)]
pub struct CategoryLabels {
    overrides: HashMap<String, String>,
}

impl CategoryLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the label of a category (builder pattern)
    pub fn with_label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), label.into());
        self
    }

    /// Builds labels from `KEY=NAME` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |labels, (key, label)| {
                labels.with_label(key.clone(), label.clone())
            })
    }

    /// Label for a category key; unknown keys are shown as-is
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(label) = self.overrides.get(key) {
            return label;
        }
        DEFAULT_LABELS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = CategoryLabels::new();
        assert_eq!(labels.label("dependencies"), "Dependencies");
        assert_eq!(labels.label("devDependencies"), "Dev Dependencies");
        assert_eq!(labels.label("peerDependencies"), "Peer Dependencies");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let labels = CategoryLabels::new();
        assert_eq!(labels.label("resolutions"), "resolutions");
    }

    #[test]
    fn test_override_wins() {
        let labels = CategoryLabels::new().with_label("devDependencies", "Tooling");
        assert_eq!(labels.label("devDependencies"), "Tooling");
        assert_eq!(labels.label("dependencies"), "Dependencies");
    }

    #[test]
    fn test_from_pairs() {
        let pairs = vec![("resolutions".to_string(), "Resolutions".to_string())];
        let labels = CategoryLabels::from_pairs(&pairs);
        assert_eq!(labels.label("resolutions"), "Resolutions");
    }
}
