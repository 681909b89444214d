//! Glob-style key matching: `*` is a wildcard, everything else is literal.

pub struct Glob(regex::Regex);

impl Glob {
    pub fn new(pattern: &str) -> Option<Self> {
        /* Escape the whole pattern, then let the wildcards back out. */
        let mut buf = regex::escape(pattern).replace("\\*", ".*");
        buf.insert(0, '^');
        buf.push('$');

        let re = regex::Regex::new(&buf);
        Some(Self(re.ok()?))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0.is_match(candidate)
    }
}

pub fn matches_any<S: AsRef<str>>(candidate: &str, patterns: &[S]) -> bool {
    patterns.iter()
        .filter_map(|p| Glob::new(p.as_ref()))
        .any(|glob| glob.matches(candidate))
}
