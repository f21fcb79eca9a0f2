//! Builder for mailto records.

use crate::header::Headers;
use crate::mailto::{MailTo, names};

/// Builds a [`MailTo`] from typed fields.
///
/// Entries are stored in call order, so calling [`MailToBuilder::to`] twice
/// yields two `to` entries that [`MailTo::to`] joins. Without any recipient,
/// an empty `to` entry is put first, matching a parsed URI with an empty
/// address segment.
///
/// ```
/// use mailto::MailToBuilder;
///
/// let mailto = MailToBuilder::new()
///     .to("alice@example.com")
///     .subject("Hello")
///     .build();
///
/// assert_eq!(
///     mailto.to_string(),
///     "mailto:?to=alice%40example.com&subject=Hello&"
/// );
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct MailToBuilder {
    headers: Headers,
}

impl MailToBuilder {
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self {
            headers: Headers::new(),
        }
    }

    /// Adds a recipient.
    pub fn to(self, address: impl Into<String>) -> Self {
        self.header(names::TO, address)
    }

    /// Adds a carbon-copy recipient.
    pub fn cc(self, address: impl Into<String>) -> Self {
        self.header(names::CC, address)
    }

    /// Adds a blind carbon-copy recipient.
    pub fn bcc(self, address: impl Into<String>) -> Self {
        self.header(names::BCC, address)
    }

    /// Sets the subject.
    pub fn subject(self, subject: impl Into<String>) -> Self {
        self.header(names::SUBJECT, subject)
    }

    /// Sets the body.
    pub fn body(self, body: impl Into<String>) -> Self {
        self.header(names::BODY, body)
    }

    /// Adds an arbitrary header. The value is taken as already decoded.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(mut self) -> MailTo {
        if self.headers.get(names::TO).is_none() {
            self.headers.insert(0, names::TO, "");
        }
        MailTo::from_headers(self.headers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::HeaderEntry;

    #[test]
    fn test_builder_empty() {
        let mailto = MailToBuilder::new().build();
        assert_eq!(mailto.headers(), &[HeaderEntry::new("to", "")]);
        assert_eq!(mailto.to().as_deref(), Some(""));
        assert_eq!(mailto.to_string(), "mailto:?to=&");
    }

    #[test]
    fn test_builder_keeps_call_order() {
        let mailto = MailToBuilder::new()
            .body("hi")
            .to("a@example.com")
            .header("in-reply-to", "<1@example.com>")
            .to("b@example.com")
            .build();

        assert_eq!(
            mailto.headers(),
            &[
                HeaderEntry::new("body", "hi"),
                HeaderEntry::new("to", "a@example.com"),
                HeaderEntry::new("in-reply-to", "<1@example.com>"),
                HeaderEntry::new("to", "b@example.com"),
            ]
        );
        assert_eq!(mailto.to().as_deref(), Some("a@example.com, b@example.com"));
    }

    #[test]
    fn test_builder_display() {
        let mailto = MailToBuilder::new()
            .to("joe@example.com")
            .cc("bob@example.com")
            .bcc("eve@example.com")
            .subject("Status report")
            .body("line one\r\nline two")
            .build();

        assert_eq!(
            mailto.to_string(),
            "mailto:?to=joe%40example.com&cc=bob%40example.com&subject=Status%20report&body=line%20one%0D%0Aline%20two&"
        );
        assert_eq!(mailto.bcc(), Some("eve@example.com"));
    }

    #[test]
    fn test_builder_without_to_matches_parsed() {
        let built = MailToBuilder::new().subject("s").build();
        let parsed = MailTo::parse("mailto:?subject=s").unwrap();

        assert_eq!(built, parsed);
        assert_eq!(built.to_string(), "mailto:?to=&subject=s&");
    }

    #[test]
    fn test_builder_values_are_not_decoded() {
        let mailto = MailToBuilder::new().body("100%25").build();
        assert_eq!(mailto.body(), Some("100%25"));
        assert_eq!(mailto.to_string(), "mailto:?to=&body=100%2525&");
    }
}
