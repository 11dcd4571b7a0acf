//! Body text resolution: pick the single best human-readable text from a
//! message's MIME part tree.
//!
//! - `text/*` leaves yield their content as-is.
//! - `multipart/alternative` prefers `text/html` over `text/plain`.
//! - Any other `multipart/*` yields its first child with non-empty text.
//! - Everything else (attachments, binary parts) yields nothing.

use crate::model::part::MessagePart;

/// Maximum nesting depth followed while resolving (to prevent stack overflow on adversarial input).
pub const MAX_DEPTH: usize = 32;

/// Resolve the best available body text of `part`, or `None` if the tree
/// holds no usable text.
pub fn resolve(part: &MessagePart) -> Option<String> {
    resolve_at(part, 0)
}

fn resolve_at(part: &MessagePart, depth: usize) -> Option<String> {
    if depth > MAX_DEPTH {
        tracing::debug!(
            media_type = part.media_type(),
            depth,
            "MIME nesting too deep, skipping subtree"
        );
        return None;
    }

    if part.is_mime_type("text/*") {
        return part.text().map(str::to_string);
    }

    if part.is_mime_type("multipart/alternative") {
        return resolve_alternative(part.children(), depth);
    }

    if part.is_mime_type("multipart/*") {
        return part
            .children()
            .iter()
            .find_map(|child| resolve_at(child, depth + 1).filter(|s| !s.is_empty()));
    }

    None
}

/// Scan the renderings of a `multipart/alternative` in order.
///
/// The first `text/plain` rendering is remembered as a fallback, a non-empty
/// `text/html` rendering wins outright, and the first rendering of any other
/// type decides the result on the spot, dropping the fallback.
fn resolve_alternative(children: &[MessagePart], depth: usize) -> Option<String> {
    let mut plain: Option<String> = None;

    for child in children {
        if child.is_mime_type("text/plain") {
            if plain.is_none() {
                plain = resolve_at(child, depth + 1);
            }
        } else if child.is_mime_type("text/html") {
            if let Some(html) = resolve_at(child, depth + 1).filter(|s| !s.is_empty()) {
                return Some(html);
            }
        } else {
            return resolve_at(child, depth + 1);
        }
    }

    plain
}
