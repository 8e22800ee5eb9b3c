//! Data model types for series title parsing.
//!
//! This module contains the types exchanged with callers: the parse verdict,
//! rejection reasons, and the canonical quality type. The internal numbering
//! outcome lives here too but is not part of the public API.

mod outcome;
mod quality;
mod result;

pub use quality::Quality;
pub use result::{ParseResult, RejectReason};

pub(crate) use outcome::NumberingOutcome;

/// Error for caller misuse of the parse entry points.
///
/// Parsing itself never fails: malformed or unrecognizable titles come back
/// as a [`ParseResult`] with `valid = false`. The only thing signalled as an
/// error is a request that could not even be attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// An empty series name or title string was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
