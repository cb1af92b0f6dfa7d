//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! checker / coordinator
//!     → tracing events (race start, winner, discards, timeouts)
//!     → logging.rs subscriber → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields (endpoint, elapsed_ms, policy) rather than formatted text
//! - Logs go to stderr; stdout carries only the JSON report

pub mod logging;
