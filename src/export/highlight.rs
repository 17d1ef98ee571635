//! Pluggable cell highlighting rules.

/// Decides which cell values get the highlight fill in XLSX output.
///
/// What counts as worth highlighting is caller policy; this crate ships
/// only the [`SubstringRule`] sentinel check and infers no accuracy
/// semantics of its own.
pub trait HighlightRule: Send + Sync {
    /// Whether the given normalized cell value should be highlighted.
    fn matches(&self, value: &str) -> bool;
}

impl<F> HighlightRule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, value: &str) -> bool {
        self(value)
    }
}

/// Highlight cells containing a sentinel substring.
#[derive(Debug, Clone)]
pub struct SubstringRule {
    needle: String,
}

impl SubstringRule {
    /// Create a rule matching cells that contain `needle`.
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }
}

impl HighlightRule for SubstringRule {
    fn matches(&self, value: &str) -> bool {
        value.contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_rule() {
        let rule = SubstringRule::new("error");
        assert!(rule.matches("read error on line 3"));
        assert!(!rule.matches("all good"));
    }

    #[test]
    fn test_closure_rule() {
        let rule = |value: &str| value.is_empty();
        assert!(HighlightRule::matches(&rule, ""));
        assert!(!HighlightRule::matches(&rule, "x"));
    }
}
