//! IMAP over implicit TLS, backed by the `imap` and `native-tls` crates.

use std::net::TcpStream;

use native_tls::{TlsConnector, TlsStream};

use super::{assemble, parse_server, Connector, MailSession, Seq};
use crate::config::ImapConfig;
use crate::error::{MailError, Result};
use crate::model::message::Message;

/// Connects to IMAP servers using the system's trusted certificates.
#[derive(Debug, Clone)]
pub struct ImapConnector {
    default_port: u16,
    mailbox: String,
}

impl ImapConnector {
    pub fn new(config: &ImapConfig) -> Self {
        Self {
            default_port: config.port,
            mailbox: config.mailbox.clone(),
        }
    }
}

impl Connector for ImapConnector {
    type Session = ImapSession;

    fn connect(&self, server: &str, user: &str, password: &str) -> Result<ImapSession> {
        let (host, port) = parse_server(server).ok_or(MailError::Usage)?;
        let port = port.unwrap_or(self.default_port);
        tracing::info!(host, port, "Connecting");

        let tls = TlsConnector::builder().build()?;
        // The host is passed twice: once to resolve, once to verify the certificate.
        let client =
            imap::connect((host, port), host, &tls).map_err(|e| MailError::connect(server, e))?;

        let session = client
            .login(user, password)
            .map_err(|(e, _client)| MailError::Login(e))?;
        tracing::info!(host, user, "Logged in");

        Ok(ImapSession {
            session,
            mailbox: self.mailbox.clone(),
        })
    }
}

/// An authenticated IMAP session.
pub struct ImapSession {
    session: imap::Session<TlsStream<TcpStream>>,
    mailbox: String,
}

impl MailSession for ImapSession {
    fn search_unseen(&mut self) -> Result<Vec<Seq>> {
        // EXAMINE keeps the mailbox read-only so nothing gets marked \Seen.
        let mailbox = self.session.examine(&self.mailbox)?;
        tracing::debug!(mailbox = %self.mailbox, exists = mailbox.exists, "Opened mailbox");

        let mut seqs: Vec<Seq> = self.session.search("UNSEEN")?.into_iter().collect();
        seqs.sort_unstable();
        tracing::info!(count = seqs.len(), "Unseen messages");
        Ok(seqs)
    }

    fn fetch_headers(&mut self, seqs: &[Seq]) -> Result<Vec<Message>> {
        if seqs.is_empty() {
            return Ok(Vec::new());
        }

        let sequence_set = seqs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let fetches = self.session.fetch(sequence_set, "BODY.PEEK[HEADER]")?;
        tracing::debug!(requested = seqs.len(), returned = fetches.len(), "Fetched headers");

        Ok(assemble(
            seqs,
            fetches.iter().map(|fetch| (fetch.message, fetch.header())),
        ))
    }

    fn fetch_message(&mut self, seq: Seq) -> Result<Message> {
        let fetches = self.session.fetch(seq.to_string(), "BODY.PEEK[]")?;
        tracing::debug!(seq, returned = fetches.len(), "Fetched message");

        let mut messages = assemble(
            &[seq],
            fetches.iter().map(|fetch| (fetch.message, fetch.body())),
        );
        Ok(messages.pop().unwrap_or_else(Message::placeholder))
    }

    fn close(mut self) -> Result<()> {
        self.session.logout()?;
        tracing::debug!("Logged out");
        Ok(())
    }
}
