//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,term,types}` and
//! holds the pieces only the binary needs: environment [`config`] and the
//! JSON-lines [`event_log`].

pub mod config;
pub mod event_log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::Config;
pub use event_log::{EventLog, EventRecord};
