//! Quality token vocabulary.
//!
//! The vocabulary maps normalized quality tokens found in release titles to
//! their canonical [`Quality`], ranks qualities against each other, and
//! knows which audio tokens must be blanked so their digits never get
//! mistaken for episode numbers.

use crate::model::Quality;

/// Default token table. Keys are normalized: lowercase, with `.` and `_`
/// already mapped to spaces by the caller.
static DEFAULT_TOKENS: phf::Map<&'static str, Quality> = phf::phf_map! {
    "1080p" => Quality::_1080p,
    "web-dl" => Quality::WebDl,
    "720p" => Quality::_720p,
    "bluray" => Quality::BluRay,
    "hdtv" => Quality::Hdtv,
    "dvdr" => Quality::Dvdr,
    "pdtv" => Quality::Pdtv,
    "x264" => Quality::X264,
    "h 264" => Quality::H264,
    "h264" => Quality::H264,
    "xvid" => Quality::Xvid,
};

/// Token scan order. Earlier entries outrank later ones, so a title carrying
/// both `720p` and `hdtv` reports 720p. `h 264` must precede `h264` so the
/// dotted spelling is consumed as one token.
static DEFAULT_PRIORITY: &[&str] = &[
    "1080p", "web-dl", "720p", "bluray", "hdtv", "dvdr", "pdtv", "x264", "h 264", "h264", "xvid",
];

/// Audio tokens whose digits would otherwise look like episode numbers.
static DEFAULT_SOUNDS: phf::Set<&'static str> = phf::phf_set! {
    "dd5 1",
    "ac3",
    "dts",
};

static DEFAULT_VOCABULARY: QualityVocabulary = QualityVocabulary::new(
    &DEFAULT_TOKENS,
    DEFAULT_PRIORITY,
    &DEFAULT_SOUNDS,
);

/// Recognized quality and sound tokens plus their ranking.
#[derive(Debug)]
pub struct QualityVocabulary {
    tokens: &'static phf::Map<&'static str, Quality>,
    priority: &'static [&'static str],
    sounds: &'static phf::Set<&'static str>,
}

impl QualityVocabulary {
    pub const fn new(
        tokens: &'static phf::Map<&'static str, Quality>,
        priority: &'static [&'static str],
        sounds: &'static phf::Set<&'static str>,
    ) -> Self {
        QualityVocabulary {
            tokens,
            priority,
            sounds,
        }
    }

    /// The built-in vocabulary used when a request does not supply one.
    pub fn default_registry() -> &'static Self {
        &DEFAULT_VOCABULARY
    }

    /// Look up a normalized token.
    pub fn lookup(&self, token: &str) -> Option<Quality> {
        self.tokens.get(token).copied()
    }

    /// All quality tokens in priority order, highest first.
    pub fn priority_tokens(&self) -> &[&'static str] {
        self.priority
    }

    /// Sound tokens, e.g. `ac3`, that carry digits but never number episodes.
    pub fn sound_tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sounds.iter().copied()
    }

    pub fn is_sound_token(&self, token: &str) -> bool {
        self.sounds.contains(token)
    }

    /// Rank of a quality in the priority list; lower is better. Unknown
    /// ranks below every listed quality.
    pub fn priority_of(&self, quality: Quality) -> usize {
        self.priority
            .iter()
            .position(|token| self.tokens.get(token) == Some(&quality))
            .unwrap_or(usize::MAX)
    }
}
