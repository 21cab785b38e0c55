//! High-precision rule matching for ticket categories.
//!
//! Rules are exact or near-exact phrases we want to catch with 100%
//! precision before the statistical classifier gets a say. The rule list is
//! ordered and evaluated first-match-wins: when two patterns both match,
//! the earlier rule's category is the answer.

use crate::{Category, TriageError};
use regex::{Regex, RegexBuilder};

/// One category rule: a case-insensitive pattern over the ticket text.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub category: Category,
    pub pattern: Regex,
}

/// Immutable, ordered rule chain.
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    rules: Vec<RuleEntry>,
}

impl RuleMatcher {
    /// The production rule table. Order is significant.
    pub fn with_default_rules() -> Self {
        Self::from_patterns(vec![
            (
                Category::Password,
                r"forgot.*pass|reset password|password reset|can't login|cannot login|forgot pasword|reset my password",
            ),
            (
                Category::Hardware,
                r"printer|paper jam|wont print|batery|ssd|hdd|fan noise|overheating|battery swelling",
            ),
            (
                Category::Network,
                r"vpn|no internet|internet down|cannot reach|network down|latnecy|disconnect|outage|email bounce|smtp 550",
            ),
            (
                Category::ServiceRequest,
                r"request to install|please install|request install|access to|permission to access|need access to",
            ),
            (
                Category::Incident,
                r"ransomware|encrypted files|malware|viruse|bsod|blue screen|data leak|data exfiltration",
            ),
        ])
        .expect("default rule table compiles")
    }

    /// Build a matcher from ordered (category, pattern) pairs.
    pub fn from_patterns(
        patterns: Vec<(Category, &str)>,
    ) -> Result<Self, TriageError> {
        let mut rules = Vec::with_capacity(patterns.len());
        for (category, pattern) in patterns {
            let pattern = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| TriageError::Rule(format!("bad pattern: {e}")))?;
            rules.push(RuleEntry { category, pattern });
        }
        Ok(Self { rules })
    }

    /// Return the category of the first rule whose pattern matches the
    /// subject+body text, or `None` when no rule fires. Pure: no state, no
    /// randomness.
    pub fn match_text(&self, subject: &str, body: &str) -> Option<Category> {
        let text = format!("{} {}", subject, body);
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(&text))
            .map(|rule| rule.category.clone())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_reset_matches() {
        let rules = RuleMatcher::with_default_rules();
        assert_eq!(
            rules.match_text("reset my password", ""),
            Some(Category::Password)
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rules = RuleMatcher::with_default_rules();
        assert_eq!(
            rules.match_text("RESET MY PASSWORD", ""),
            Some(Category::Password)
        );
        assert_eq!(rules.match_text("", "Paper Jam in tray 2"), Some(Category::Hardware));
    }

    #[test]
    fn test_body_alone_can_match() {
        let rules = RuleMatcher::with_default_rules();
        assert_eq!(
            rules.match_text("", "the vpn keeps dropping"),
            Some(Category::Network)
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let rules = RuleMatcher::with_default_rules();
        assert_eq!(rules.match_text("hello", "just saying hi"), None);
        assert_eq!(rules.match_text("", ""), None);
    }

    #[test]
    fn test_earlier_rule_wins_when_both_match() {
        // "vpn" (Network) is listed before "ransomware" (Incident)
        let rules = RuleMatcher::with_default_rules();
        assert_eq!(
            rules.match_text("vpn down after ransomware scare", ""),
            Some(Category::Network)
        );
    }

    #[test]
    fn test_custom_order_is_respected() {
        let rules = RuleMatcher::from_patterns(vec![
            (Category::Incident, r"broken"),
            (Category::Hardware, r"broken"),
        ])
        .unwrap();
        assert_eq!(rules.match_text("broken", ""), Some(Category::Incident));

        let reversed = RuleMatcher::from_patterns(vec![
            (Category::Hardware, r"broken"),
            (Category::Incident, r"broken"),
        ])
        .unwrap();
        assert_eq!(reversed.match_text("broken", ""), Some(Category::Hardware));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        assert!(RuleMatcher::from_patterns(vec![(Category::Hardware, r"([")]).is_err());
    }
}
