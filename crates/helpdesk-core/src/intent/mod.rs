//! Deterministic keyword-based intent matching.
//!
//! The [`IntentMatcher`] walks an ordered table of [`Rule`]s and returns the
//! canned answer bound to the first rule whose [`Predicate`] holds for the
//! case-folded input. A trailing default rule always matches, so
//! classification is total: every input yields exactly one answer.

pub mod rules;

/// Boolean combination of substring tests over normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every input.
    Always,
    /// Input contains the (lowercase) keyword.
    Contains(&'static str),
    /// Every inner predicate matches.
    All(Vec<Predicate>),
    /// At least one inner predicate matches.
    Any(Vec<Predicate>),
    /// Inner predicate does not match.
    Not(Box<Predicate>),
}

impl Predicate {
    /// Evaluate against input that has already been through [`normalize`].
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Contains(keyword) => normalized.contains(keyword),
            Predicate::All(inner) => inner.iter().all(|p| p.matches(normalized)),
            Predicate::Any(inner) => inner.iter().any(|p| p.matches(normalized)),
            Predicate::Not(inner) => !inner.matches(normalized),
        }
    }
}

/// `Contains(keyword)`.
pub fn contains(keyword: &'static str) -> Predicate {
    Predicate::Contains(keyword)
}

/// Matches when any of the keywords is present.
pub fn any_of(keywords: &[&'static str]) -> Predicate {
    Predicate::Any(keywords.iter().copied().map(Predicate::Contains).collect())
}

/// Matches when every predicate matches.
pub fn all(predicates: Vec<Predicate>) -> Predicate {
    Predicate::All(predicates)
}

/// Matches when any predicate matches.
pub fn any(predicates: Vec<Predicate>) -> Predicate {
    Predicate::Any(predicates)
}

/// Negation.
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::Not(Box::new(predicate))
}

/// Case-fold and collapse runs of whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A named predicate bound to a canned answer.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub response: &'static str,
}

impl Rule {
    pub fn new(name: &'static str, predicate: Predicate, response: &'static str) -> Self {
        Self {
            name,
            predicate,
            response,
        }
    }
}

/// Ordered rule table with a catch-all default.
///
/// The default is kept outside the ordered list so it can only ever fire last.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<Rule>,
    default: Rule,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new(rules::builtin_rules(), rules::DEFAULT_RESPONSE)
    }
}

impl IntentMatcher {
    /// Build a matcher from an ordered rule list and the catch-all answer.
    pub fn new(rules: Vec<Rule>, default_response: &'static str) -> Self {
        Self {
            rules,
            default: Rule::new(rules::DEFAULT_RULE, Predicate::Always, default_response),
        }
    }

    /// The rule that fires for `user_text`: the first match in table order.
    pub fn matching_rule(&self, user_text: &str) -> &Rule {
        let normalized = normalize(user_text);
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(&normalized))
            .unwrap_or(&self.default)
    }

    /// Answer for `user_text`. Total and deterministic.
    pub fn classify(&self, user_text: &str) -> &str {
        let rule = self.matching_rule(user_text);
        tracing::debug!(rule = rule.name, "Intent rule matched");
        rule.response
    }

    /// Rule names in evaluation order, default last.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.default))
            .map(|rule| rule.name)
            .collect()
    }
}
