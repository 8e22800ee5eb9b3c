//! Numbering strategy engine.
//!
//! An ordered list of strategy functions, each inspecting the token stream
//! (or, for dates, the raw text) and reporting a [`NumberingOutcome`] or no
//! match. The first strategy that matches wins and later ones are never
//! consulted, which keeps the priority order auditable and each strategy
//! testable on its own.

use std::ops::Range;

use crate::lexer::Token;
use crate::model::NumberingOutcome;
use crate::vocab::QualityVocabulary;

/// Everything a strategy may look at.
pub(crate) struct StrategyInput<'a> {
    pub tokens: &'a [(Token<'a>, Range<usize>)],
    pub text: &'a str,
    pub expect_episode: bool,
    pub vocabulary: &'a QualityVocabulary,
}

/// A successful match: the outcome plus where in the text it begins.
/// The start offset feeds the strict-name check.
#[derive(Debug)]
pub(crate) struct StrategyHit {
    pub outcome: NumberingOutcome,
    pub start: usize,
}

type Strategy = for<'a> fn(&StrategyInput<'a>) -> Option<StrategyHit>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("sxx_eyy", sxx_eyy),
    ("n_x_m", n_x_m),
    ("verbose", verbose),
    ("part_numeral", part_numeral),
    ("y_of_z", y_of_z),
    ("concatenated", concatenated),
    ("date", date),
    ("sequence", sequence),
];

/// Run the strategies in priority order, stopping at the first match.
pub(crate) fn resolve(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    for (label, strategy) in STRATEGIES {
        if let Some(hit) = strategy(input) {
            tracing::debug!(
                strategy = label,
                identifier = %hit.outcome.identifier(),
                "numbering matched"
            );
            return Some(hit);
        }
    }
    tracing::debug!("no numbering strategy matched");
    None
}

fn parse_num(digits: &str) -> Option<u16> {
    digits.parse().ok()
}

/// Roman numerals I through X; anything longer is out of range.
fn roman_value(word: &str) -> Option<u16> {
    match word.to_ascii_lowercase().as_str() {
        "i" => Some(1),
        "ii" => Some(2),
        "iii" => Some(3),
        "iv" => Some(4),
        "v" => Some(5),
        "vi" => Some(6),
        "vii" => Some(7),
        "viii" => Some(8),
        "ix" => Some(9),
        "x" => Some(10),
        _ => None,
    }
}

/// Season number from a `Season N` / `Series N` / `Season2` marker directly
/// before the token at `idx`. Returns the season and the marker's start.
fn season_prefix(
    tokens: &[(Token<'_>, Range<usize>)],
    idx: usize,
) -> Option<(u16, usize)> {
    if idx >= 1 {
        if let (marker @ (Token::SeasonWord(_) | Token::SeriesWord(_)), span) = &tokens[idx - 1] {
            if let Some(digits) = marker.attached_digits() {
                return Some((parse_num(digits)?, span.start));
            }
        }
    }
    if idx >= 2 {
        if let (Token::Number(digits), _) = &tokens[idx - 1] {
            if let (marker @ (Token::SeasonWord(_) | Token::SeriesWord(_)), span) = &tokens[idx - 2]
            {
                if marker.attached_digits().is_none() {
                    return Some((parse_num(digits)?, span.start));
                }
            }
        }
    }
    None
}

/// True when the tokens after an episode marker continue into a range, e.g.
/// the `-4` in `S6 E1-4`. Ranges are season packs, not single episodes.
///
/// A digit-leading release group (`-2HD`) lexes as hyphen, number, and an
/// abutting word; the range endpoint must stand alone, so that shape is not
/// a range.
pub(crate) fn continues_as_range(tokens: &[(Token<'_>, Range<usize>)], idx: usize) -> bool {
    if !matches!(tokens.get(idx), Some((Token::Hyphen, _))) {
        return false;
    }
    match tokens.get(idx + 1) {
        Some((Token::EpisodeNumber(_), _)) => true,
        Some((Token::Number(_), span)) => !matches!(
            tokens.get(idx + 2),
            Some((Token::Word(_), next)) if next.start == span.end
        ),
        _ => false,
    }
}

fn sxx_eyy(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    for (idx, (token, span)) in input.tokens.iter().enumerate() {
        match token {
            Token::SeasonEpisode(text) => {
                let body = &text[1..];
                let Some(split) = body.find(['e', 'E']) else {
                    continue;
                };
                let (Some(season), Some(episode)) =
                    (parse_num(&body[..split]), parse_num(&body[split + 1..]))
                else {
                    continue;
                };
                if continues_as_range(input.tokens, idx + 1) {
                    continue;
                }
                return Some(StrategyHit {
                    outcome: NumberingOutcome::Episode { season, episode },
                    start: span.start,
                });
            }
            Token::SeasonOnly(text) => {
                if let Some((Token::EpisodeNumber(ep), _)) = input.tokens.get(idx + 1) {
                    if continues_as_range(input.tokens, idx + 2) {
                        continue;
                    }
                    let (Some(season), Some(episode)) =
                        (parse_num(&text[1..]), parse_num(&ep[1..]))
                    else {
                        continue;
                    };
                    return Some(StrategyHit {
                        outcome: NumberingOutcome::Episode { season, episode },
                        start: span.start,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

fn n_x_m(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    for (idx, (token, span)) in input.tokens.iter().enumerate() {
        match token {
            Token::SeasonEpisodeX(text) => {
                let Some(split) = text.find(['x', 'X']) else {
                    continue;
                };
                let (Some(season), Some(episode)) =
                    (parse_num(&text[..split]), parse_num(&text[split + 1..]))
                else {
                    continue;
                };
                // Four-digit "seasons" like 2008x12 are dates, not episodes.
                if season <= 99 {
                    return Some(StrategyHit {
                        outcome: NumberingOutcome::Episode { season, episode },
                        start: span.start,
                    });
                }
            }
            Token::Number(digits) => {
                let x = matches!(input.tokens.get(idx + 1), Some((Token::Word(w), _)) if w.eq_ignore_ascii_case("x"));
                if !x {
                    continue;
                }
                if let Some((Token::Number(ep), _)) = input.tokens.get(idx + 2) {
                    let (Some(season), Some(episode)) = (parse_num(digits), parse_num(ep)) else {
                        continue;
                    };
                    if season <= 99 {
                        return Some(StrategyHit {
                            outcome: NumberingOutcome::Episode { season, episode },
                            start: span.start,
                        });
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// The value following a keyword marker: attached digits, a free-standing
/// number, or a Roman numeral word.
fn marker_value(
    marker: &Token<'_>,
    tokens: &[(Token<'_>, Range<usize>)],
    idx: usize,
) -> Option<u16> {
    if let Some(digits) = marker.attached_digits() {
        return parse_num(digits);
    }
    match tokens.get(idx + 1) {
        Some((Token::Number(digits), _)) => parse_num(digits),
        Some((Token::Word(word), _)) => roman_value(word),
        _ => None,
    }
}

fn verbose(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    for (idx, (token, span)) in input.tokens.iter().enumerate() {
        if !matches!(token, Token::EpisodeWord(_) | Token::EpWord(_)) {
            continue;
        }
        let Some(episode) = marker_value(token, input.tokens, idx) else {
            continue;
        };
        let (season, start) = match season_prefix(input.tokens, idx) {
            Some((season, start)) => (season, start),
            None => (1, span.start),
        };
        return Some(StrategyHit {
            outcome: NumberingOutcome::Episode { season, episode },
            start,
        });
    }
    None
}

fn part_numeral(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    for (idx, (token, span)) in input.tokens.iter().enumerate() {
        if !matches!(token, Token::PartWord(_)) {
            continue;
        }
        let Some(episode) = marker_value(token, input.tokens, idx) else {
            continue;
        };
        return Some(StrategyHit {
            outcome: NumberingOutcome::Episode { season: 1, episode },
            start: span.start,
        });
    }
    None
}

fn y_of_z(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    for (idx, (token, span)) in input.tokens.iter().enumerate() {
        match token {
            Token::EpisodeOfTotal(text) => {
                let Some(split) = text.to_ascii_lowercase().find("of") else {
                    continue;
                };
                let Some(episode) = parse_num(&text[..split]) else {
                    continue;
                };
                let (season, start) = match season_prefix(input.tokens, idx) {
                    Some((season, start)) => (season, start),
                    None => (1, span.start),
                };
                return Some(StrategyHit {
                    outcome: NumberingOutcome::Episode { season, episode },
                    start,
                });
            }
            Token::Number(digits) => {
                let of = matches!(input.tokens.get(idx + 1), Some((Token::OfWord(_), _)));
                if !of {
                    continue;
                }
                if matches!(input.tokens.get(idx + 2), Some((Token::Number(_), _))) {
                    let Some(episode) = parse_num(digits) else {
                        continue;
                    };
                    let (season, start) = match season_prefix(input.tokens, idx) {
                        Some((season, start)) => (season, start),
                        None => (1, span.start),
                    };
                    return Some(StrategyHit {
                        outcome: NumberingOutcome::Episode { season, episode },
                        start,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

fn concatenated(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    if !input.expect_episode {
        return None;
    }
    for (token, span) in input.tokens {
        let Token::Number(digits) = token else {
            continue;
        };
        if !(3..=4).contains(&digits.len()) {
            continue;
        }
        if input.vocabulary.lookup(digits).is_some() || input.vocabulary.is_sound_token(digits) {
            continue;
        }
        let split = digits.len() - 2;
        let (Some(season), Some(episode)) =
            (parse_num(&digits[..split]), parse_num(&digits[split..]))
        else {
            continue;
        };
        return Some(StrategyHit {
            outcome: NumberingOutcome::Episode { season, episode },
            start: span.start,
        });
    }
    None
}

fn date(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    let bytes = input.text.as_bytes();
    let is_sep = |b: u8| matches!(b, b'x' | b'X' | b'-' | b' ' | b'.' | b'/');

    let mut i = 0;
    while i + 4 <= bytes.len() {
        if !bytes[i].is_ascii_digit() || (i > 0 && bytes[i - 1].is_ascii_alphanumeric()) {
            i += 1;
            continue;
        }
        if let Some(hit) = date_at(input.text, bytes, i, is_sep) {
            return Some(hit);
        }
        i += 1;
    }
    None
}

/// Try to read `YYYY sep MM sep DD` starting at byte `i`.
fn date_at(text: &str, bytes: &[u8], i: usize, is_sep: impl Fn(u8) -> bool) -> Option<StrategyHit> {
    let (year, after_year) = read_digits(text, bytes, i, 4, 4)?;
    if !(1900..=2099).contains(&year) {
        return None;
    }
    if !is_sep(*bytes.get(after_year)?) {
        return None;
    }
    let (month, after_month) = read_digits(text, bytes, after_year + 1, 1, 2)?;
    if !is_sep(*bytes.get(after_month)?) {
        return None;
    }
    let (day, after_day) = read_digits(text, bytes, after_month + 1, 1, 2)?;
    if after_day < bytes.len() && bytes[after_day].is_ascii_alphanumeric() {
        return None;
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(StrategyHit {
        outcome: NumberingOutcome::Date {
            year,
            month: month as u8,
            day: day as u8,
        },
        start: i,
    })
}

/// A digit run of `min..=max` length at `i`, not continuing past `max`.
fn read_digits(
    text: &str,
    bytes: &[u8],
    i: usize,
    min: usize,
    max: usize,
) -> Option<(u16, usize)> {
    let mut end = i;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let len = end - i;
    if !(min..=max).contains(&len) {
        return None;
    }
    Some((text[i..end].parse().ok()?, end))
}

fn sequence(input: &StrategyInput<'_>) -> Option<StrategyHit> {
    if input.expect_episode {
        return None;
    }
    for (token, span) in input.tokens {
        let Token::Number(digits) = token else {
            continue;
        };
        if !(1..=3).contains(&digits.len()) {
            continue;
        }
        if input.vocabulary.lookup(digits).is_some() || input.vocabulary.is_sound_token(digits) {
            continue;
        }
        return Some(StrategyHit {
            outcome: NumberingOutcome::Sequence {
                digits: (*digits).to_string(),
            },
            start: span.start,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn run(text: &str, expect_episode: bool) -> Option<NumberingOutcome> {
        let lexer = Lexer::new(text);
        let input = StrategyInput {
            tokens: lexer.tokens(),
            text,
            expect_episode,
            vocabulary: QualityVocabulary::default_registry(),
        };
        resolve(&input).map(|hit| hit.outcome)
    }

    fn episode(season: u16, episode: u16) -> Option<NumberingOutcome> {
        Some(NumberingOutcome::Episode { season, episode })
    }

    #[test]
    fn test_explicit_sxx_eyy() {
        assert_eq!(run("S02E03", true), episode(2, 3));
        assert_eq!(run("s2e3", true), episode(2, 3));
        assert_eq!(run("S00E00", true), episode(0, 0));
        assert_eq!(run("S6 E2", true), episode(6, 2));
    }

    #[test]
    fn test_episode_range_is_not_a_single_episode() {
        assert_eq!(run("S6 E1-4", true), None);
        assert_eq!(run("S6 E1 - E4", true), None);
    }

    #[test]
    fn test_digit_leading_group_is_not_a_range() {
        // "-2HD" is a release group, not the "-4" of "E1-4".
        assert_eq!(run("S02E04 XviD-2HD", true), episode(2, 4));
        assert_eq!(run("S6 E2-2HD", true), episode(6, 2));
    }

    #[test]
    fn test_oversized_number_does_not_abort_the_strategy() {
        // A digit run too large for an episode value is skipped, and the
        // genuine match later in the title is still found.
        assert_eq!(run("123456 x 2 1x02", true), episode(1, 2));
    }

    #[test]
    fn test_n_x_m() {
        assert_eq!(run("2x03", true), episode(2, 3));
        assert_eq!(run("9x02", true), episode(9, 2));
        assert_eq!(run("1 x 2", true), episode(1, 2));
    }

    #[test]
    fn test_verbose_forms() {
        assert_eq!(run("Season 2 Episode 14", true), episode(2, 14));
        assert_eq!(run("Series 2 Ep 14", true), episode(2, 14));
        assert_eq!(run("Season2 Episode14", true), episode(2, 14));
        assert_eq!(run("Episode 14", true), episode(1, 14));
        assert_eq!(run("Ep 14", true), episode(1, 14));
        assert_eq!(run("Episode VIII", true), episode(1, 8));
    }

    #[test]
    fn test_part_numerals() {
        assert_eq!(run("Part 2", true), episode(1, 2));
        assert_eq!(run("Part3", true), episode(1, 3));
        assert_eq!(run("Pt I", true), episode(1, 1));
        assert_eq!(run("Part IV", true), episode(1, 4));
        // Romans past X are out of range for episode values.
        assert_eq!(run("Part XI", true), None);
    }

    #[test]
    fn test_y_of_z() {
        assert_eq!(run("2of12", true), episode(1, 2));
        assert_eq!(run("2 of 12", true), episode(1, 2));
        assert_eq!(run("Season 4 5 of 9", true), episode(4, 5));
    }

    #[test]
    fn test_concatenated_digits() {
        assert_eq!(run("706", true), episode(7, 6));
        assert_eq!(run("0706", true), episode(7, 6));
        // Too many digits to be season+episode.
        assert_eq!(run("5190458", true), None);
        // Only applies when episodes are expected.
        assert_ne!(run("706", false), episode(7, 6));
    }

    #[test]
    fn test_dates() {
        assert_eq!(
            run("2008x12 13", true),
            Some(NumberingOutcome::Date {
                year: 2008,
                month: 12,
                day: 13
            })
        );
        // Invalid calendar values fall through.
        assert_eq!(run("2008x18 13", true), None);
    }

    #[test]
    fn test_sequence_ids() {
        assert_eq!(
            run("77", false),
            Some(NumberingOutcome::Sequence { digits: "77".into() })
        );
        assert_eq!(
            run("077", false),
            Some(NumberingOutcome::Sequence { digits: "077".into() })
        );
        assert_eq!(run("77", true), None);
    }

    #[test]
    fn test_priority_explicit_beats_concatenated() {
        assert_eq!(run("S02E03 706", true), episode(2, 3));
    }
}
