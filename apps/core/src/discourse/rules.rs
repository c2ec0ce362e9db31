//! Priority-ordered marker rules.
//!
//! Both segment classifiers are a list of `(label, markers)` pairs checked in
//! order against the lowercased segment; the first rule with a marker
//! contained in the text wins, otherwise the default label applies.
//! Containment is plain substring search, so "butter" contains "but".

/// One label and the markers that select it
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule<L: 'static> {
    pub label: L,
    pub markers: &'static [&'static str],
}

/// Outcome of a rule evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<L> {
    pub label: L,
    /// Marker that fired, `None` when the default label was used
    pub marker: Option<&'static str>,
}

/// Evaluate rules in priority order against `text`
pub fn first_match<L: Copy>(rules: &[MarkerRule<L>], default: L, text: &str) -> RuleMatch<L> {
    let lower = text.to_lowercase();

    for rule in rules {
        if let Some(marker) = rule.markers.iter().find(|m| lower.contains(**m)) {
            return RuleMatch {
                label: rule.label,
                marker: Some(*marker),
            };
        }
    }

    RuleMatch {
        label: default,
        marker: None,
    }
}
