//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized in the remainder of a title after the series name.
///
/// The lexer runs on normalized text: separators have already been mapped to
/// spaces and quality tokens blanked, so what is left is numbering markers,
/// ordinary words, and hyphens. Priorities resolve overlaps with the generic
/// `Word` and `Number` patterns.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Season and episode identifier (e.g., S01E05, S6E02, S1936E18)
    #[regex(r"(?i)S[0-9]{1,4}E[0-9]{1,4}", priority = 10)]
    SeasonEpisode(&'src str),

    /// Season and disc identifier (e.g., S02D1) - marks a disc image release
    #[regex(r"(?i)S[0-9]{1,4}D[0-9]{1,2}", priority = 10)]
    SeasonDisc(&'src str),

    /// Whole-season marker in NxM position (e.g., 1xAll, 2xComplete)
    #[regex(r"(?i)[0-9]{1,4}x(all|complete)", priority = 10)]
    SeasonXAll(&'src str),

    /// Season x episode format (e.g., 1x05, 01x05, 9x02)
    #[regex(r"[0-9]{1,4}[xX][0-9]{1,3}", priority = 9)]
    SeasonEpisodeX(&'src str),

    /// X of Y format without separators (e.g., "4of9")
    #[regex(r"(?i)[0-9]{1,3}of[0-9]{1,3}", priority = 9)]
    EpisodeOfTotal(&'src str),

    /// Plural "Seasons" keyword - marks a multi-season pack
    #[regex(r"(?i)seasons", priority = 9)]
    SeasonsWord(&'src str),

    /// Spelled-out "Season" keyword, optionally with attached digits
    #[regex(r"(?i)season[0-9]*", priority = 8)]
    SeasonWord(&'src str),

    /// Spelled-out "Series" keyword, optionally with attached digits
    #[regex(r"(?i)series[0-9]*", priority = 8)]
    SeriesWord(&'src str),

    /// Spelled-out "Episode" keyword, optionally with attached digits
    #[regex(r"(?i)episode[0-9]*", priority = 8)]
    EpisodeWord(&'src str),

    /// Abbreviated "Ep" keyword, optionally with attached digits
    #[regex(r"(?i)ep[0-9]*", priority = 8)]
    EpWord(&'src str),

    /// "Part" or "Pt" keyword, optionally with attached digits
    #[regex(r"(?i)(part|pt)[0-9]*", priority = 8)]
    PartWord(&'src str),

    /// Bare episode marker (e.g., E1) - pairs with a preceding SeasonOnly
    #[regex(r"(?i)e[0-9]{1,4}", priority = 8)]
    EpisodeNumber(&'src str),

    /// Season-only identifier (e.g., S6) - for full season releases
    /// Note: SeasonEpisode has higher priority, so this only matches when no E follows
    #[regex(r"(?i)s[0-9]{1,4}", priority = 8)]
    SeasonOnly(&'src str),

    /// "Complete" keyword - marks a season pack
    #[regex(r"(?i)complete", priority = 8)]
    CompleteWord(&'src str),

    /// Proper or repack marker
    #[regex(r"(?i)(proper|repack)", priority = 8)]
    ProperWord(&'src str),

    /// "of" keyword - pairs surrounding numbers into a Y-of-Z episode
    #[regex(r"(?i)of", priority = 8)]
    OfWord(&'src str),

    /// Hyphen delimiter - separates a trailing release group
    #[token("-")]
    Hyphen,

    /// Generic word token (lower priority than specific patterns)
    #[regex(r"[a-zA-Z][a-zA-Z0-9']*", priority = 1)]
    Word(&'src str),

    /// Numeric token
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),
}

impl<'src> Token<'src> {
    /// The trailing digits of a keyword token like `Season2` or `Ep06`,
    /// if any are attached.
    pub fn attached_digits(&self) -> Option<&'src str> {
        let text = match self {
            Token::SeasonWord(s)
            | Token::SeriesWord(s)
            | Token::EpisodeWord(s)
            | Token::EpWord(s)
            | Token::PartWord(s) => s,
            _ => return None,
        };
        let start = text.find(|c: char| c.is_ascii_digit())?;
        Some(&text[start..])
    }
}
