use std::collections::BTreeSet;

/// Process-wide set of currencies the gateway accepts.
///
/// Built once from configuration and shared read-only by every authorization.
/// Matching is exact: `gbp` is not `GBP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAllowList {
    codes: BTreeSet<String>,
}

impl CurrencyAllowList {
    pub const DEFAULT_CODES: [&'static str; 3] = ["USD", "EUR", "GBP"];

    /// Builds an allow-list from configured codes, trimming whitespace and
    /// upper-casing each entry. Blank entries are ignored.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_ascii_uppercase())
            .filter(|code| !code.is_empty())
            .collect();
        Self { codes }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CurrencyAllowList {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CODES)
    }
}
