//! Message handles and the summaries shown in the unread listing.

use super::address::EmailAddress;
use super::part::MessagePart;

/// A fetched message: the few headers we display plus its MIME part tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    subject: Option<String>,
    from: Option<EmailAddress>,
    root: MessagePart,
}

impl Message {
    pub fn new(subject: Option<String>, from: Option<EmailAddress>, root: MessagePart) -> Self {
        Self {
            subject,
            from,
            root,
        }
    }

    /// Stand-in for a message the server returned nothing usable for. It
    /// keeps its position in the unread list but has no headers or text.
    pub fn placeholder() -> Self {
        Self::new(None, None, MessagePart::leaf("application/octet-stream", ""))
    }

    /// Decoded `Subject:` header (RFC 2047 encoded-words resolved).
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// First mailbox of the `From:` header.
    pub fn from(&self) -> Option<&EmailAddress> {
        self.from.as_ref()
    }

    pub fn root_part(&self) -> &MessagePart {
        &self.root
    }

    /// Derive the listing summary for this message.
    pub fn summary(&self) -> MessageSummary<'_> {
        MessageSummary {
            subject: self.subject().unwrap_or(""),
            from: self.from.as_ref().map(ToString::to_string).unwrap_or_default(),
        }
    }
}

/// Subject and sender of one unread message, borrowed from the search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSummary<'a> {
    pub subject: &'a str,
    pub from: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_headers() {
        let msg = Message::new(
            Some("Hello World".into()),
            Some(EmailAddress::from_parts(Some("User One"), Some("user1@example.com"))),
            MessagePart::leaf("text/plain", "body"),
        );
        let summary = msg.summary();
        assert_eq!(summary.subject, "Hello World");
        assert_eq!(summary.from, "User One <user1@example.com>");
    }

    #[test]
    fn test_summary_without_headers() {
        let msg = Message::new(None, None, MessagePart::leaf("text/plain", ""));
        let summary = msg.summary();
        assert_eq!(summary.subject, "");
        assert_eq!(summary.from, "");
    }

    #[test]
    fn test_placeholder_has_no_text() {
        let msg = Message::placeholder();
        assert_eq!(msg.subject(), None);
        assert!(msg.from().is_none());
        assert_eq!(msg.root_part().media_type(), "application/octet-stream");
        assert_eq!(msg.summary().subject, "");
    }
}
