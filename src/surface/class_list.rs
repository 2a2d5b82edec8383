use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered set of class tokens, like an element's `classList`.
///
/// Tokens keep insertion order and appear at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Adds `token` at the end unless already present.
    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.0.push(token.to_string());
        }
    }

    /// Removes `token` if present.
    pub fn remove(&mut self, token: &str) {
        self.0.retain(|t| t != token);
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tokens are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_deduplicated() {
        let mut list = ClassList::default();
        list.add("a");
        list.add("b");
        list.add("a");

        assert_eq!(list.to_string(), "a b");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut list = ClassList::default();
        list.add("a");
        list.remove("z");
        list.remove("a");

        assert!(list.is_empty());
    }
}
