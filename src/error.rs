//! Centralized error types for mailpeek.

use thiserror::Error;

/// The fixed usage line printed for any malformed invocation.
pub const USAGE: &str = "Usage: mailpeek server user password <email_to_retrieve>";

/// All errors produced by the mailpeek library.
#[derive(Error, Debug)]
pub enum MailError {
    /// Wrong argument count, a non-integer message index, or a bad server address.
    #[error("{}", USAGE)]
    Usage,

    /// The TLS connector could not be initialized.
    #[error("{0}")]
    Tls(#[from] native_tls::Error),

    /// The TCP connection, TLS handshake, or server greeting failed.
    /// Displays only the underlying failure; `server` is kept for logging.
    #[error("{source}")]
    Connect {
        server: String,
        source: imap::error::Error,
    },

    /// The server rejected the credentials.
    #[error("{0}")]
    Login(imap::error::Error),

    /// A command on an authenticated session failed (EXAMINE, SEARCH, FETCH, LOGOUT).
    #[error("{0}")]
    Protocol(#[from] imap::error::Error),

    /// A fetched message could not be parsed.
    #[error("Could not parse message: {0}")]
    Parse(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, MailError>`.
pub type Result<T> = std::result::Result<T, MailError>;

impl MailError {
    /// Create a `Connect` variant for the given server address.
    pub fn connect(server: impl Into<String>, source: imap::error::Error) -> Self {
        Self::Connect {
            server: server.into(),
            source,
        }
    }

    /// Whether this error is a usage problem (no connection was attempted).
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage)
    }
}
