//! Operator-selected upgrade

use serde::{Deserialize, Serialize};
use std::fmt;

/// One upgrade the operator confirmed
///
/// `(category_key, package_name)` addresses exactly one manifest field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChoice {
    pub category_key: String,
    pub package_name: String,
    /// Range that replaces the current manifest value
    pub latest_range: String,
}

impl UpdateChoice {
    pub fn new(
        category_key: impl Into<String>,
        package_name: impl Into<String>,
        latest_range: impl Into<String>,
    ) -> Self {
        Self {
            category_key: category_key.into(),
            package_name: package_name.into(),
            latest_range: latest_range.into(),
        }
    }
}

impl fmt::Display for UpdateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} → {}",
            self.category_key, self.package_name, self.latest_range
        )
    }
}
