//! Multi-strategy parser for series episode release titles.
//!
//! Given a series name and a raw release title ("Some.Show.S02E03.720p.HDTV-GRP"),
//! the parser decides whether the title belongs to that series and, if so,
//! which episode it numbers, what quality it carries, and which group
//! released it. Titles that name a whole season, a disc image, or nothing
//! recognizable come back invalid with a reason.
//!
//! # Quick start
//!
//! ```
//! let result = episodic::parse("Some Show", "Some.Show.S02E03.720p.HDTV-GRP").unwrap();
//! assert!(result.valid);
//! assert_eq!(result.season, Some(2));
//! assert_eq!(result.episode, Some(3));
//! assert_eq!(result.identifier, "S02E03");
//! ```
//!
//! # Options
//!
//! Matching behavior is configured per request:
//!
//! ```
//! use episodic::ParseRequest;
//!
//! let request = ParseRequest::builder("Some Show", "Some.Show.706.720p")
//!     .expect_episode(true)
//!     .build()
//!     .unwrap();
//! let result = episodic::parse_request(&request);
//! assert!(result.valid);
//! assert_eq!(result.identifier, "S07E06");
//! ```
//!
//! # How parsing works
//!
//! Five stages run in order: the title is normalized and the series name
//! located; quality and sound tokens are extracted and blanked; an ordered
//! chain of numbering strategies (explicit SxxEyy, NxM, verbose prose,
//! part numerals, "Y of Z", concatenated digits, dates, sequence ids) is
//! tried until one matches; rejection rules catch season packs, episode
//! ranges, and disc releases; finally the release group is composed from a
//! trailing `-GROUP` or leading `[GROUP]` tag.

mod lexer;
mod model;
mod parser;
mod request;
mod vocab;

pub use model::{ParseResult, Quality, RejectReason, RequestError};
pub use request::{ParseRequest, ParseRequestBuilder};
pub use vocab::QualityVocabulary;

/// Parse a release title against a series name with default options.
///
/// Returns an error only when the name or title is empty; an unmatched
/// title is not an error but an invalid [`ParseResult`].
pub fn parse(name: &str, data: &str) -> Result<ParseResult, RequestError> {
    let request = ParseRequest::new(name, data)?;
    Ok(parser::run(&request))
}

/// Parse with explicit options.
pub fn parse_request(request: &ParseRequest) -> ParseResult {
    parser::run(request)
}
