//! Tempo Arbiter - Stack-based time-scale arbitration
//!
//! This crate implements the arbitration core:
//! - Clock sinks (the injected simulation-rate capability)
//! - Diagnostics sinks (optional, never-failing reporting)
//! - The arbitration stack (push/pop/remove/clear + winner selection)

pub mod clock;
pub mod diag;
pub mod stack;

pub use clock::*;
pub use diag::*;
pub use stack::*;
