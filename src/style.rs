use std::fmt;

/// An ordered union of style tokens (utility classes), joined with single spaces.
///
/// Tokens are kept in insertion order and empty tokens are skipped, so
/// `StyleTokens::new().push("a").push("").push("b")` renders as `"a b"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTokens(Vec<String>);

impl StyleTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        if !token.is_empty() {
            self.0.push(token.to_string());
        }
        self
    }

    pub fn push_if(self, cond: bool, token: impl AsRef<str>) -> Self {
        if cond {
            self.push(token)
        } else {
            self
        }
    }

    /// Whether any class in the union is the utility `prefix`, ignoring
    /// variant prefixes (`md:`, `hover:`) and the important marker (`!`).
    pub fn has_utility(&self, prefix: &str) -> bool {
        self.0
            .iter()
            .flat_map(|t| t.split_whitespace())
            .filter_map(|class| class.rsplit(':').next())
            .any(|utility| utility.trim_start_matches('!').starts_with(prefix))
    }
}

impl fmt::Display for StyleTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl From<StyleTokens> for String {
    fn from(value: StyleTokens) -> Self {
        value.to_string()
    }
}

/// Resolves a caller-supplied token: `None` takes `default`, an empty string
/// takes `empty`, anything else is used as given.
pub fn resolve_token<'a>(token: Option<&'a str>, default: &'a str, empty: &'a str) -> &'a str {
    match token {
        None => default,
        Some("") => empty,
        Some(t) => t,
    }
}
