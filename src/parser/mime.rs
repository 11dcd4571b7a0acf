//! MIME message parsing: turn a raw RFC 5322 message into an owned
//! [`Message`] handle with its part tree.

use mail_parser::{MessageParser, MimeHeaders, PartType};

use crate::error::{MailError, Result};
use crate::model::address::EmailAddress;
use crate::model::message::Message;
use crate::model::part::MessagePart;

/// Maximum depth for recursive multipart conversion (to prevent stack overflow on adversarial input).
const MAX_DEPTH: usize = 64;

/// Parse a complete raw message (headers + body).
///
/// Uses `mail-parser` internally, which takes care of transfer encodings,
/// charsets and RFC 2047 encoded-words.
pub fn parse_message(raw_message: &[u8]) -> Result<Message> {
    let parsed = MessageParser::default()
        .parse(raw_message)
        .ok_or_else(|| MailError::Parse("no RFC 5322 message found".into()))?;

    let subject = parsed.subject().map(String::from);
    let from = parsed
        .from()
        .and_then(|address| address.first())
        .map(|addr| EmailAddress::from_parts(addr.name.as_deref(), addr.address.as_deref()));
    let root = convert_part(&parsed, parsed.root_part(), 0);

    tracing::trace!(
        subject = subject.as_deref().unwrap_or(""),
        media_type = root.media_type(),
        "Parsed message"
    );

    Ok(Message::new(subject, from, root))
}

/// Convert one `mail-parser` part (and its subtree) into a [`MessagePart`].
fn convert_part(
    msg: &mail_parser::Message<'_>,
    part: &mail_parser::MessagePart<'_>,
    depth: usize,
) -> MessagePart {
    let media_type = media_type(part);

    match &part.body {
        PartType::Text(text) | PartType::Html(text) => MessagePart::leaf(&media_type, text.to_string()),
        PartType::Multipart(ids) => {
            if depth >= MAX_DEPTH {
                tracing::warn!(depth, "MIME nesting too deep, dropping children");
                return MessagePart::container(&media_type, Vec::new());
            }
            let children = ids
                .iter()
                .filter_map(|id| msg.parts.get(*id as usize))
                .map(|child| convert_part(msg, child, depth + 1))
                .collect();
            MessagePart::container(&media_type, children)
        }
        PartType::Binary(_) | PartType::InlineBinary(_) | PartType::Message(_) => {
            MessagePart::leaf(&media_type, String::new())
        }
    }
}

/// The part's declared `type/subtype`, or the RFC 2045 default implied by its body.
fn media_type(part: &mail_parser::MessagePart<'_>) -> String {
    part.content_type()
        .map(|ct: &mail_parser::ContentType| {
            let main = ct.ctype();
            match ct.subtype() {
                Some(sub) => format!("{main}/{sub}"),
                None => main.to_string(),
            }
        })
        .unwrap_or_else(|| {
            match &part.body {
                PartType::Text(_) => "text/plain",
                PartType::Html(_) => "text/html",
                PartType::Multipart(_) => "multipart/mixed",
                PartType::Message(_) => "message/rfc822",
                PartType::Binary(_) | PartType::InlineBinary(_) => "application/octet-stream",
            }
            .to_string()
        })
}
