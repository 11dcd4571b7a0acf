//! The MIME part tree.

/// One MIME entity of a message.
///
/// A message owns its whole tree; parts never change once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart {
    /// A single-body entity. `text` holds the decoded content for `text/*`
    /// parts and is empty for everything else (attachments, binary data,
    /// embedded messages).
    Leaf { media_type: String, text: String },

    /// A `multipart/*` entity with its children in document order.
    Container {
        media_type: String,
        children: Vec<MessagePart>,
    },
}

impl MessagePart {
    /// Build a leaf, lowercasing the media type.
    pub fn leaf(media_type: &str, text: impl Into<String>) -> Self {
        Self::Leaf {
            media_type: media_type.trim().to_ascii_lowercase(),
            text: text.into(),
        }
    }

    /// Build a container, lowercasing the media type.
    pub fn container(media_type: &str, children: Vec<MessagePart>) -> Self {
        Self::Container {
            media_type: media_type.trim().to_ascii_lowercase(),
            children,
        }
    }

    /// The lowercase `type/subtype` string.
    pub fn media_type(&self) -> &str {
        match self {
            Self::Leaf { media_type, .. } | Self::Container { media_type, .. } => media_type,
        }
    }

    /// Case-insensitive media type check. A pattern ending in `/*` matches
    /// every subtype of that top-level type.
    pub fn is_mime_type(&self, pattern: &str) -> bool {
        let media_type = self.media_type();
        match pattern.strip_suffix("/*") {
            Some(primary) => media_type
                .split_once('/')
                .map(|(top, _)| top.eq_ignore_ascii_case(primary))
                .unwrap_or_else(|| media_type.eq_ignore_ascii_case(primary)),
            None => media_type.eq_ignore_ascii_case(pattern),
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[MessagePart] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Container { children, .. } => children,
        }
    }

    /// Raw textual content of a leaf; `None` for containers.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Leaf { text, .. } => Some(text),
            Self::Container { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_is_lowercased() {
        let part = MessagePart::leaf("Text/HTML", "<p>hi</p>");
        assert_eq!(part.media_type(), "text/html");
    }

    #[test]
    fn test_wildcard_match() {
        let part = MessagePart::leaf("text/calendar", "BEGIN:VCALENDAR");
        assert!(part.is_mime_type("text/*"));
        assert!(part.is_mime_type("TEXT/CALENDAR"));
        assert!(!part.is_mime_type("text/plain"));
        assert!(!part.is_mime_type("multipart/*"));
    }

    #[test]
    fn test_wildcard_does_not_match_prefix_only() {
        let part = MessagePart::leaf("textual/plain", "x");
        assert!(!part.is_mime_type("text/*"));
    }

    #[test]
    fn test_children_and_text() {
        let part = MessagePart::container(
            "multipart/mixed",
            vec![MessagePart::leaf("text/plain", "a")],
        );
        assert_eq!(part.children().len(), 1);
        assert_eq!(part.text(), None);
        assert_eq!(part.children()[0].text(), Some("a"));
        assert!(part.children()[0].children().is_empty());
    }
}
