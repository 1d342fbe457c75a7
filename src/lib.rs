//! Vaultdiff - compare the secrets of two vaults in your terminal.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── diff          # Fetch both vaults, diff, render
//! │   ├── vaults        # List configured vaults
//! │   ├── completions   # Shell completions
//! │   └── output        # Styled terminal output + diff table
//! ├── core/             # Core library components
//! │   ├── secret        # The secret record shape the engine compares
//! │   ├── diff          # Reconciliation engine
//! │   └── fetch         # Bounded parallel mapper
//! ├── vault/            # Vault backends
//! │   ├── http          # Remote KV-style API (bearer token, paginated)
//! │   └── snapshot      # Local JSON snapshot files
//! └── config            # vaultdiff.toml management
//! ```
//!
//! # Features
//!
//! - Deterministic, ordered diff of two secret collections by name
//! - Per-property change detail (value, content type)
//! - Comparison modes: everything, only missing, only modified
//! - Concurrency-capped value fetching that respects vault rate limits
//! - Remote vaults and local JSON snapshots behind one surface

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod vault;
