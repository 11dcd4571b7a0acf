//! Core data model types: the MIME part tree, message handles, and addresses.

pub mod address;
pub mod message;
pub mod part;
