//! Falling Balls (workspace facade crate).
//!
//! Re-exports the engine and host crates under `falling_balls::{core, input,
//! term, types}` and holds the binary's configuration, logging and headless
//! simulation.

pub use falling_balls_core as core;
pub use falling_balls_input as input;
pub use falling_balls_term as term;
pub use falling_balls_types as types;

pub mod config;
pub mod logging;
pub mod simulate;
