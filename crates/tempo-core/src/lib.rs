//! Tempo Core - Fundamental types for time-scale arbitration
//!
//! This crate defines the core types used throughout Tempo:
//! - Identifiers (RequestId) and the well-known request registry
//! - Scale and priority primitives (TimeScale, Priority)
//! - Request values (ScaleRequest)
//! - Error taxonomy

pub mod id;
pub mod scale;
pub mod request;
pub mod error;

pub use id::*;
pub use scale::*;
pub use request::*;
pub use error::*;
