//! Sender addresses (RFC 5322 §3.4 mailboxes).

/// A sender mailbox as shown in the unread listing.
///
/// # Examples
/// - `Some("Juan García")`, `Some("juan@ejemplo.com")` → `"Juan García <juan@ejemplo.com>"`
/// - `None`, `Some("user@example.com")` → `"user@example.com"`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailAddress {
    /// Human-readable display name (may be empty).
    pub display_name: String,
    /// The bare email address (`user@domain`), may be empty for group syntax.
    pub address: String,
}

impl EmailAddress {
    /// Build an address from the optional pieces a header parser hands back.
    ///
    /// Surrounding whitespace and double-quotes are stripped from the name.
    pub fn from_parts(display_name: Option<&str>, address: Option<&str>) -> Self {
        Self {
            display_name: display_name.map(strip_quotes).unwrap_or_default(),
            address: address.map(|a| a.trim().to_string()).unwrap_or_default(),
        }
    }

    /// Format for display: `"Display Name <address>"`, just `"address"`, or just the name.
    pub fn display(&self) -> String {
        match (self.display_name.is_empty(), self.address.is_empty()) {
            (true, _) => self.address.clone(),
            (false, true) => self.display_name.clone(),
            (false, false) => format!("{} <{}>", self.display_name, self.address),
        }
    }
}

/// Strip surrounding double-quotes and trim whitespace.
fn strip_quotes(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
