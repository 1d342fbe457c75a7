//! Core library components.
//!
//! The reconciliation engine and the pieces it depends on. Everything here is
//! free of ambient state; vault sessions and terminal concerns live in the
//! `vault` and `cli` modules.

pub mod diff;
pub mod fetch;
pub mod secret;
