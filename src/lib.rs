//! Lights Out (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces
//! that only the terminal runner needs: configuration and logging setup.

pub mod config;
pub mod logging;

pub use lights_out_core as core;
pub use lights_out_input as input;
pub use lights_out_term as term;
pub use lights_out_types as types;
