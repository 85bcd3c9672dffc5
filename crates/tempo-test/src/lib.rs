//! Tempo Test Harness - scenario driving and validation
//!
//! This crate provides:
//! - Subsystem toggle models (pause, slow-motion, hit-stop, ...)
//! - A scenario driver for scripted and seeded-random toggle sequences
//! - End-to-end arbitration tests

pub mod scenario;

pub use scenario::*;
