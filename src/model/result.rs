//! Final parse result returned to callers.

use crate::model::Quality;

/// Why a title was rejected even though the series name matched (or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RejectReason {
    /// The expected series name was not found at the start of the title.
    NameMismatch,
    /// The name matched but no numbering strategy produced an identifier.
    NoEpisodeNumber,
    /// The title names a whole season rather than one episode.
    SeasonPack,
    /// The title is a disc image release.
    DiscRelease,
    /// Strict name matching was requested and extra words precede the
    /// numbering.
    StrictNameMismatch,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NameMismatch => write!(f, "name_mismatch"),
            RejectReason::NoEpisodeNumber => write!(f, "no_episode_number"),
            RejectReason::SeasonPack => write!(f, "season_pack"),
            RejectReason::DiscRelease => write!(f, "disc_release"),
            RejectReason::StrictNameMismatch => write!(f, "strict_name_mismatch"),
        }
    }
}

/// Everything extracted from one release title.
///
/// `valid` is the headline answer: did the title match the requested series
/// and resolve to a single episode, date, or sequence number? When it is
/// false, `reject_reason` says why, and any fields that were still
/// recoverable (quality, group, proper flag) remain populated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// The series name the parse was requested with, unchanged.
    pub name: String,
    /// Whether the title matched the series and numbered a single episode.
    pub valid: bool,
    /// Season number, when the numbering resolved to a season/episode pair.
    pub season: Option<u16>,
    /// Episode number, when the numbering resolved to a season/episode pair.
    pub episode: Option<u16>,
    /// Canonical identifier: `S01E02`, `2008-12-13`, or raw digits.
    ///
    /// Empty when no numbering was found.
    pub identifier: String,
    /// Highest-priority quality token found in the title.
    pub quality: Quality,
    /// True when the title carries a proper or repack marker.
    pub proper_or_repack: bool,
    /// Release group, from a trailing `-GROUP` or a leading `[GROUP]` tag.
    pub group: Option<String>,
    /// Set when `valid` is false.
    pub reject_reason: Option<RejectReason>,
}

impl ParseResult {
    /// A rejected result carrying only the reason and whatever fields the
    /// caller already recovered.
    pub(crate) fn rejected(name: &str, reason: RejectReason) -> Self {
        ParseResult {
            name: name.to_string(),
            valid: false,
            season: None,
            episode: None,
            identifier: String::new(),
            quality: Quality::Unknown,
            proper_or_repack: false,
            group: None,
            reject_reason: Some(reason),
        }
    }
}
