//! Single-endpoint probing.
//!
//! # Data Flow
//! ```text
//! Endpoint (endpoint.rs)
//!     → checker.rs (HEAD request, raced against the race's cancel token)
//!     → status classified OK-like (200..=399)?
//!         yes → ProbeResult (result.rs) sent on the race channel
//!         no  → discarded, logged at debug
//! ```
//!
//! # Design Decisions
//! - One request per endpoint per race, no retries
//! - Failures are not reported individually; losing and failing look the same
//! - Response bodies are never read, only dropped

pub mod checker;
pub mod endpoint;
pub mod result;

pub use checker::{check, is_ok_like, CheckFailure};
pub use endpoint::Endpoint;
pub use result::{ProbeResult, Survey};
