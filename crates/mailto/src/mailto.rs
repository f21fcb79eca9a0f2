//! Mailto URI parsing and serialization (RFC 6068).

use crate::encoding::{percent_decode, percent_encode};
use crate::error::{Error, Result};
use crate::header::{HeaderEntry, Headers};
use std::fmt;
use std::str::FromStr;

/// URI scheme prefix, matched case-insensitively.
const SCHEME: &str = "mailto:";

/// Separator used when joining multiple `to` values.
const RECIPIENT_SEPARATOR: &str = ", ";

/// Well-known header names.
pub mod names {
    /// Primary recipients.
    pub const TO: &str = "to";
    /// Carbon-copy recipients.
    pub const CC: &str = "cc";
    /// Blind carbon-copy recipients.
    pub const BCC: &str = "bcc";
    /// Message subject.
    pub const SUBJECT: &str = "subject";
    /// Message body.
    pub const BODY: &str = "body";
}

/// Returns true if `candidate` starts with `mailto:` (ASCII case-insensitive).
///
/// Nothing after the scheme is validated.
#[must_use]
pub fn is_mailto(candidate: &str) -> bool {
    candidate
        .get(..SCHEME.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SCHEME))
}

/// A parsed `mailto:` URI.
///
/// Holds the header fields in the order they appeared. There is always at
/// least one `to` entry: parsing stores the address segment first, and the
/// builder adds an empty one when no recipient was given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MailTo {
    headers: Headers,
}

impl MailTo {
    pub(crate) const fn from_headers(headers: Headers) -> Self {
        Self { headers }
    }

    /// Parses a `mailto:` URI.
    ///
    /// Query tokens without `=` are skipped, and a `%` that does not start a
    /// valid escape is kept literally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `uri` does not start with `mailto:`.
    pub fn parse(uri: &str) -> Result<Self> {
        if !is_mailto(uri) {
            tracing::debug!(uri, "Rejecting non-mailto input");
            return Err(Error::InvalidArgument(uri.to_string()));
        }

        let rest = &uri[SCHEME.len()..];
        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut headers = Headers::new();
        headers.add(names::TO, percent_decode(address));

        for token in query.split('&').filter(|token| !token.is_empty()) {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            headers.add(percent_decode(key), percent_decode(value));
        }

        tracing::trace!(entries = headers.len(), "Parsed mailto URI");
        Ok(Self { headers })
    }

    /// Returns all stored header entries, in order.
    #[must_use]
    pub fn headers(&self) -> &[HeaderEntry] {
        self.headers.as_slice()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if no entries are stored. Always false, since every
    /// record holds a `to` entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns an iterator over the stored entries.
    pub fn iter(&self) -> std::slice::Iter<'_, HeaderEntry> {
        self.headers.iter()
    }

    /// Gets the first value of a header (case-sensitive name match).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Gets every value of a header, in order.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers.get_all(name)
    }

    /// Gets the recipients.
    ///
    /// The address segment and every `to=` query field are joined with `", "`
    /// in source order. A URI with an empty address segment therefore yields
    /// a leading `", "` (e.g., `mailto:?to=joe@example.com` gives
    /// `", joe@example.com"`).
    #[must_use]
    pub fn to(&self) -> Option<String> {
        let mut values = self.headers.get_all(names::TO).peekable();
        values.peek()?;
        Some(values.collect::<Vec<_>>().join(RECIPIENT_SEPARATOR))
    }

    /// Gets the first `cc` value.
    #[must_use]
    pub fn cc(&self) -> Option<&str> {
        self.headers.get(names::CC)
    }

    /// Gets the first `bcc` value.
    #[must_use]
    pub fn bcc(&self) -> Option<&str> {
        self.headers.get(names::BCC)
    }

    /// Gets the first `subject` value.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.headers.get(names::SUBJECT)
    }

    /// Gets the first `body` value, already decoded (may contain CR/LF).
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.headers.get(names::BODY)
    }
}

/// Writes the canonical form: `mailto:?to=...&cc=...&subject=...&body=...&`.
///
/// Only `to`, `cc`, `subject` and `body` are written, each when present.
impl fmt::Display for MailTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SCHEME)?;
        f.write_str("?")?;

        if let Some(to) = self.to() {
            write!(f, "{}={}&", names::TO, percent_encode(&to))?;
        }

        let fields = [
            (names::CC, self.cc()),
            (names::SUBJECT, self.subject()),
            (names::BODY, self.body()),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                write!(f, "{name}={}&", percent_encode(value))?;
            }
        }

        Ok(())
    }
}

impl FromStr for MailTo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MailTo {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl<'a> IntoIterator for &'a MailTo {
    type Item = &'a HeaderEntry;
    type IntoIter = std::slice::Iter<'a, HeaderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
