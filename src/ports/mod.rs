// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait interfaces through which the domain and
//! adapter layers collaborate: the diagnostic sink that receives leveled
//! messages, and the lock probe consulted by the availability checker.

pub mod probe;
pub mod sink;

// Re-export commonly used types
pub use probe::LockProbe;
pub use sink::{DiagnosticSink, LogLevel};
