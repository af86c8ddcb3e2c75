//! Blocktris (workspace facade crate).
//!
//! Re-exports the member crates under `blocktris::{core,types}` so drivers and
//! tests depend on a single package.

pub use blocktris_core as core;
pub use blocktris_types as types;
