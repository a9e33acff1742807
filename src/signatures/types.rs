use regex::Regex;

/// A named category of log issue, identified by a matching rule.
///
/// The pattern is searched against each line (not anchored), so several
/// signatures may hit the same line independently. Remediation text is
/// written in the markup mini-language rendered by the reporters.
#[derive(Debug, Clone)]
pub struct Signature {
    pub name: &'static str,
    pub pattern: Regex,
    pub remediation: &'static str,
}

impl Signature {
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}
