//! Ordered header storage for mailto records.

use std::fmt;

/// A single `name=value` field of a mailto URI.
///
/// The value is stored percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaderEntry {
    /// Header name, exactly as parsed.
    pub name: String,
    /// Decoded header value.
    pub value: String,
}

impl HeaderEntry {
    /// Creates a new header entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for HeaderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Ordered collection of header entries.
///
/// Names may repeat. Lookups are case-sensitive and walk the entries in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Headers {
    entries: Vec<HeaderEntry>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a header entry, keeping any existing entries with the same name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(HeaderEntry::new(name, value));
    }

    /// Inserts a header entry at `index`, shifting later entries back.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn insert(&mut self, index: usize, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(index, HeaderEntry::new(name, value));
    }

    /// Gets the value of the first entry with this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    /// Gets all values for a name, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[HeaderEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, HeaderEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a HeaderEntry;
    type IntoIter = std::slice::Iter<'a, HeaderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<HeaderEntry> for Headers {
    fn from_iter<I: IntoIterator<Item = HeaderEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::needless_collect)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_new() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn test_headers_add_get() {
        let mut headers = Headers::new();
        headers.add("subject", "hello");
        assert_eq!(headers.get("subject"), Some("hello"));
        assert_eq!(headers.get("Subject"), None); // Case sensitive
    }

    #[test]
    fn test_headers_duplicates_kept_in_order() {
        let mut headers = Headers::new();
        headers.add("to", "alice@example.com");
        headers.add("cc", "carol@example.com");
        headers.add("to", "bob@example.com");

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("to"), Some("alice@example.com"));
        let all: Vec<_> = headers.get_all("to").collect();
        assert_eq!(all, vec!["alice@example.com", "bob@example.com"]);
    }

    #[test]
    fn test_headers_insert_front() {
        let mut headers = Headers::new();
        headers.add("subject", "s");
        headers.insert(0, "to", "");

        assert_eq!(headers.as_slice()[0], HeaderEntry::new("to", ""));
        assert_eq!(headers.as_slice()[1], HeaderEntry::new("subject", "s"));
    }

    #[test]
    fn test_headers_iter_preserves_order() {
        let headers: Headers = [
            HeaderEntry::new("to", ""),
            HeaderEntry::new("body", "hi"),
            HeaderEntry::new("subject", "s"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = headers.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["to", "body", "subject"]);
    }

    #[test]
    fn test_header_entry_display() {
        let entry = HeaderEntry::new("cc", "bob@example.com");
        assert_eq!(entry.to_string(), "cc: bob@example.com");
    }
}
