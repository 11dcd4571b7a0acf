//! Email parsing: RFC 5322 messages into MIME part trees.

pub mod mime;
