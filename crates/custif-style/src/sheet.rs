//! Ordered rule collection

use crate::generate::generate;
use crate::rule::StyleRule;
use serde::{Deserialize, Serialize};

/// Ordered sequence of style rules.
///
/// Order is significant: it is the cascade order inside each breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    /// Builder-style push
    pub fn rule(mut self, rule: StyleRule) -> Self {
        self.push(rule);
        self
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the stylesheet text
    pub fn to_css(&self) -> String {
        generate(&self.rules)
    }
}

impl From<Vec<StyleRule>> for StyleSheet {
    fn from(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<StyleRule> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = StyleRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<StyleRule> for StyleSheet {
    fn extend<I: IntoIterator<Item = StyleRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl IntoIterator for StyleSheet {
    type Item = StyleRule;
    type IntoIter = std::vec::IntoIter<StyleRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_keeps_insertion_order() {
        let mut sheet = StyleSheet::new()
            .rule(StyleRule::desktop("#a", "margin-left", "auto"))
            .rule(StyleRule::desktop("#a", "margin-right", "0"));
        sheet.extend([StyleRule::desktop("#a", "margin-left", "0")]);

        assert_eq!(sheet.len(), 3);
        assert_eq!(
            sheet.to_css(),
            "#a { margin-left: auto; }#a { margin-right: 0; }#a { margin-left: 0; }"
        );
    }
}
