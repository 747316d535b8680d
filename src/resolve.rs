//! Deciding what to do with the operator's selection

use crate::domain::UpdateChoice;
use log::debug;

/// Next step after the prompt is confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing was selected; the manifest stays untouched
    NoChange,
    /// Patch the manifest with these choices, in confirmation order
    Apply(Vec<UpdateChoice>),
}

/// Turns a confirmed selection into a resolution
///
/// Only emptiness is checked. The choices were built from the same
/// analysis snapshot in this session and are trusted as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionResolver;

impl SelectionResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, selected: Vec<UpdateChoice>) -> Resolution {
        debug!("operator selected {} upgrade(s)", selected.len());
        if selected.is_empty() {
            Resolution::NoChange
        } else {
            Resolution::Apply(selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_no_change() {
        assert_eq!(SelectionResolver::new().resolve(Vec::new()), Resolution::NoChange);
    }

    #[test]
    fn test_selection_is_passed_through_in_order() {
        let selected = vec![
            UpdateChoice::new("devDependencies", "jest", "^29.7.0"),
            UpdateChoice::new("dependencies", "react", "^18.2.0"),
        ];
        assert_eq!(
            SelectionResolver::new().resolve(selected.clone()),
            Resolution::Apply(selected)
        );
    }
}
