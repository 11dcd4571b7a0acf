//! Access to a mailbox of unread messages.
//!
//! The command driver only talks to these traits, so listing and retrieval
//! can run against fabricated in-memory messages as well as a real server.

pub mod imaps;

use std::collections::HashMap;

use crate::error::Result;
use crate::model::message::Message;
use crate::parser::mime;

/// Message sequence number within the opened mailbox.
pub type Seq = u32;

/// Opens authenticated sessions.
pub trait Connector {
    type Session: MailSession;

    /// Connect to `server` (`host` or `host:port`) and log in with a password.
    fn connect(&self, server: &str, user: &str, password: &str) -> Result<Self::Session>;
}

/// An authenticated, read-only view of one mailbox.
pub trait MailSession {
    /// Sequence numbers of all messages lacking the `\Seen` flag, ascending.
    fn search_unseen(&mut self) -> Result<Vec<Seq>>;

    /// Header-only handles for `seqs`, one per sequence number and in the
    /// same order. Bodies are not downloaded.
    fn fetch_headers(&mut self, seqs: &[Seq]) -> Result<Vec<Message>>;

    /// The complete message with sequence number `seq`.
    fn fetch_message(&mut self, seq: Seq) -> Result<Message>;

    /// End the session and release the connection.
    fn close(self) -> Result<()>;
}

/// Line up raw FETCH payloads with the searched sequence numbers.
///
/// The result has exactly one entry per element of `seqs`. A sequence number
/// the server sent no payload for, or whose payload does not parse, becomes
/// [`Message::placeholder`] so later positions never shift.
pub fn assemble<'a, I>(seqs: &[Seq], payloads: I) -> Vec<Message>
where
    I: IntoIterator<Item = (Seq, Option<&'a [u8]>)>,
{
    let mut by_seq: HashMap<Seq, &[u8]> = payloads
        .into_iter()
        .filter_map(|(seq, data)| data.map(|data| (seq, data)))
        .collect();

    seqs.iter()
        .map(|seq| match by_seq.remove(seq) {
            Some(data) => mime::parse_message(data).unwrap_or_else(|e| {
                tracing::warn!(seq, error = %e, "Unparsable message, listing it blank");
                Message::placeholder()
            }),
            None => {
                tracing::warn!(seq, "FETCH returned no data, listing it blank");
                Message::placeholder()
            }
        })
        .collect()
}

/// Split a server argument into host and optional port.
/// Returns `None` for an empty host or an invalid port.
pub fn parse_server(server: &str) -> Option<(&str, Option<u16>)> {
    let server = server.trim();
    let (host, port) = match server.rsplit_once(':') {
        // Bare IPv6 literals contain colons but no port.
        Some((host, _)) if host.contains(':') && !host.ends_with(']') => (server, None),
        Some((host, port)) => (host, Some(port.parse().ok().filter(|p| *p != 0)?)),
        None => (server, None),
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    (!host.is_empty()).then_some((host, port))
}

/// Whether `server` is a usable `host` or `host:port` argument.
pub fn validate_server(server: &str) -> bool {
    parse_server(server).is_some()
}
