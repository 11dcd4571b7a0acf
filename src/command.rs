//! The command driver: argument handling, the listing and retrieval
//! routines, and the connect → search → print → close sequence.

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;

use crate::error::{MailError, Result};
use crate::model::message::Message;
use crate::resolve::resolve;
use crate::session::{validate_server, Connector, MailSession, Seq};

/// Printed in list mode when the search matched nothing.
pub const NO_UNREAD: &str = "No unread messages :)";

/// Printed when the requested index is outside the unread list.
pub const NOT_FOUND: &str = "Message does not exist";

#[derive(Parser)]
#[command(name = "mailpeek", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(allow_hyphen_values = true)]
    server: String,
    #[arg(allow_hyphen_values = true)]
    user: String,
    // Passwords may start with '-'.
    #[arg(allow_hyphen_values = true)]
    password: String,
    /// 1-based position in the unread list
    #[arg(value_name = "EMAIL_TO_RETRIEVE", allow_hyphen_values = true)]
    index: Option<i64>,
}

/// What to do once the unread messages are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalTarget {
    /// Print a summary line per unread message.
    List,
    /// Print the body of the message at this 1-based position. Any integer
    /// is accepted; positions outside the list print [`NOT_FOUND`].
    Message(i64),
}

/// A fully validated command line.
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    pub server: String,
    pub user: String,
    pub password: String,
    pub target: RetrievalTarget,
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("server", &self.server)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("target", &self.target)
            .finish()
    }
}

/// Parse the positional arguments (program name excluded).
///
/// Anything other than `server user password [index]` with an integer index
/// is a [`MailError::Usage`].
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from("mailpeek")).chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(argv).map_err(|e| {
        tracing::debug!(error = %e, "Rejected command line");
        MailError::Usage
    })?;

    if !validate_server(&cli.server) {
        return Err(MailError::Usage);
    }

    Ok(Invocation {
        server: cli.server,
        user: cli.user,
        password: cli.password,
        target: cli
            .index
            .map_or(RetrievalTarget::List, RetrievalTarget::Message),
    })
}

/// Write one `"N. subject (sender)"` line per message, or [`NO_UNREAD`].
pub fn list_messages<W: Write>(out: &mut W, messages: &[Message]) -> Result<()> {
    if messages.is_empty() {
        writeln!(out, "{NO_UNREAD}")?;
        return Ok(());
    }

    for (i, message) in messages.iter().enumerate() {
        let summary = message.summary();
        writeln!(out, "{}. {} ({})", i + 1, summary.subject, summary.from)?;
    }
    Ok(())
}

/// Map a 1-based position onto the unread list; any other integer is `None`.
pub fn select(unseen: &[Seq], index: i64) -> Option<Seq> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| unseen.get(i))
        .copied()
}

/// Write the resolved body of the unread message at 1-based `index`, or
/// [`NOT_FOUND`] when there is no such message. Only the selected message
/// is loaded. A message without any readable text prints nothing.
pub fn print_message<W, F>(out: &mut W, unseen: &[Seq], index: i64, load: F) -> Result<()>
where
    W: Write,
    F: FnOnce(Seq) -> Result<Message>,
{
    let Some(seq) = select(unseen, index) else {
        tracing::debug!(index, count = unseen.len(), "Index outside unread list");
        writeln!(out, "{NOT_FOUND}")?;
        return Ok(());
    };

    let message = load(seq)?;
    match resolve(message.root_part()) {
        Some(text) => writeln!(out, "{text}")?,
        None => tracing::debug!(index, seq, "Message has no readable text"),
    }
    Ok(())
}

/// Search the unread messages and run the routine matching `target`.
pub fn dispatch<S, W>(session: &mut S, out: &mut W, target: RetrievalTarget) -> Result<()>
where
    S: MailSession,
    W: Write,
{
    let unseen = session.search_unseen()?;
    match target {
        RetrievalTarget::List => {
            let messages = session.fetch_headers(&unseen)?;
            list_messages(out, &messages)
        }
        RetrievalTarget::Message(index) => {
            print_message(out, &unseen, index, |seq| session.fetch_message(seq))
        }
    }
}

/// Connect, search, print, and close the session.
///
/// The session is closed on every path once connected; a failure to close
/// is logged and never replaces the outcome of the run.
pub fn run<C, W>(connector: &C, invocation: &Invocation, out: &mut W) -> Result<()>
where
    C: Connector,
    W: Write,
{
    let mut session =
        connector.connect(&invocation.server, &invocation.user, &invocation.password)?;

    let result = dispatch(&mut session, out, invocation.target);

    if let Err(e) = session.close() {
        tracing::warn!(error = %e, "Failed to close session");
    }

    result
}
