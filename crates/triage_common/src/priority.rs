//! Priority resolution with keyword escalation.
//!
//! Base priority comes from the category; keyword escalation can only raise
//! it, never lower it. Critical-signaling keywords are checked before
//! High-signaling ones, so a Critical hit short-circuits.

use crate::{Category, Priority};
use regex::{Regex, RegexBuilder};

/// Keywords that force Critical regardless of base priority.
const CRITICAL_KEYWORDS: &str =
    r"production|data loss|cannot work|can't work|outage|ransom|encrypted|critical";

/// Urgency keywords that raise the priority to at least High.
const HIGH_KEYWORDS: &str = r"urgent|asap|immediately|priority";

pub struct PriorityResolver {
    critical: Regex,
    high: Regex,
}

impl PriorityResolver {
    pub fn new() -> Self {
        Self {
            critical: compile(CRITICAL_KEYWORDS),
            high: compile(HIGH_KEYWORDS),
        }
    }

    /// Default priority for a category. Categories outside the map (new
    /// classifier labels) land on Medium.
    pub fn base_priority(category: &Category) -> Priority {
        match category {
            Category::Password => Priority::High,
            Category::Hardware => Priority::Low,
            Category::Network => Priority::High,
            Category::ServiceRequest => Priority::Low,
            Category::Incident => Priority::Critical,
            Category::Other(_) => Priority::Medium,
        }
    }

    /// Resolve the final priority for a ticket. Monotonic: the result is
    /// never below the category's base priority.
    pub fn resolve(&self, category: &Category, subject: &str, body: &str) -> Priority {
        let base = Self::base_priority(category);
        let text = format!("{} {}", subject, body);

        if self.critical.is_match(&text) {
            return Priority::Critical;
        }
        if self.high.is_match(&text) {
            return base.max(Priority::High);
        }
        base
    }
}

impl Default for PriorityResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("keyword table compiles")
}
