//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the key/value capability the engine persists through.
//! - Map between persisted JSON documents and domain state, substituting
//!   seed defaults for absent or corrupt values.
//!
//! # Invariants
//! - Corrupt persisted JSON is never surfaced as an error; it degrades to
//!   seed defaults per key.
//! - Storage transport failures do propagate.

pub mod kv;
pub mod state;
