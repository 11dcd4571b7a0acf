//! `mailpeek` — list unread IMAP mail or print the readable body of one
//! unread message.
//!
//! This crate provides the MIME body resolver, the message model, the IMAP
//! session adapter, and the command driver used by the `mailpeek` binary.

pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod resolve;
pub mod session;
