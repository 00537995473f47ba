//! Response envelope subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → responder.rs (success / error operations)
//!     → code.rs (status → wire code)
//!     → envelope.rs (SuccessEnvelope / ErrorEnvelope)
//!     → http adapter (WriteJson strategy picked at construction)
//!     → sink
//! ```
//!
//! # Design Decisions
//! - Responder is immutable once built and holds no per-request state
//! - The write strategy is a type parameter, not a runtime type switch
//! - Error logging is best-effort and never changes what gets written

pub mod code;
pub mod config;
pub mod envelope;
pub mod error;
pub mod responder;

pub use code::{derive_code, reason_phrase};
pub use config::ResponderConfig;
pub use envelope::{Envelope, ErrorEnvelope, Status, SuccessEnvelope};
pub use error::{ResponseError, ResponseResult};
pub use responder::Responder;
