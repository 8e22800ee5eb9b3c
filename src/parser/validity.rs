//! Rejection rules applied after numbering resolution.
//!
//! A title can carry a perfectly good series name and still not be a single
//! episode: whole-season packs, multi-episode ranges, and disc images are
//! all rejected here. The strict-name policy also lives here since it needs
//! the numbering start offset.

use std::ops::Range;

use crate::lexer::Token;
use crate::model::{NumberingOutcome, RejectReason};
use crate::parser::numbering::{continues_as_range, StrategyHit};

pub(crate) fn evaluate(
    tokens: &[(Token<'_>, Range<usize>)],
    hit: Option<&StrategyHit>,
    strict_name: bool,
) -> Option<RejectReason> {
    if tokens.iter().any(|(t, _)| matches!(t, Token::SeasonDisc(_))) {
        return Some(RejectReason::DiscRelease);
    }
    if is_season_pack(tokens, hit) {
        return Some(RejectReason::SeasonPack);
    }
    if strict_name {
        if let Some(hit) = hit {
            let stray_word = tokens.iter().any(|(t, span)| {
                matches!(t, Token::Word(w) if w.chars().all(|c| c.is_ascii_alphabetic()))
                    && span.end <= hit.start
            });
            if stray_word {
                return Some(RejectReason::StrictNameMismatch);
            }
        }
    }
    None
}

fn is_season_family(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::SeasonWord(_)
            | Token::SeasonsWord(_)
            | Token::SeriesWord(_)
            | Token::SeasonOnly(_)
            | Token::SeasonXAll(_)
    )
}

fn is_season_pack(tokens: &[(Token<'_>, Range<usize>)], hit: Option<&StrategyHit>) -> bool {
    let has_marker = tokens.iter().any(|(t, _)| {
        matches!(t, Token::SeasonsWord(_) | Token::SeasonXAll(_))
    });
    if has_marker {
        return true;
    }

    // "Complete" only marks a pack next to a season token; an episode title
    // containing the word on its own is fine.
    let complete_pack = tokens.iter().enumerate().any(|(idx, (token, _))| {
        matches!(token, Token::CompleteWord(_))
            && (idx
                .checked_sub(1)
                .is_some_and(|prev| is_season_family(&tokens[prev].0))
                || tokens
                    .get(idx + 1)
                    .map_or(false, |(next, _)| is_season_family(next)))
    });
    if complete_pack {
        return true;
    }

    for (idx, (token, _)) in tokens.iter().enumerate() {
        match token {
            // S6 alone, or S6 E1-4 / S01E01-E04 episode ranges.
            Token::SeasonOnly(_) => {
                let paired = matches!(tokens.get(idx + 1), Some((Token::EpisodeNumber(_), _)));
                if !paired || continues_as_range(tokens, idx + 2) {
                    return true;
                }
            }
            Token::SeasonEpisode(_) => {
                if continues_as_range(tokens, idx + 1) {
                    return true;
                }
            }
            // "Season 2" with a number but no resolved episode.
            Token::SeasonWord(_) | Token::SeriesWord(_) => {
                let has_number = token.attached_digits().is_some()
                    || matches!(tokens.get(idx + 1), Some((Token::Number(_), _)));
                let resolved_episode = matches!(
                    hit,
                    Some(StrategyHit {
                        outcome: NumberingOutcome::Episode { .. },
                        ..
                    })
                );
                if has_number && !resolved_episode {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::numbering::{self, StrategyInput};
    use crate::vocab::QualityVocabulary;

    fn check(text: &str, strict_name: bool) -> Option<RejectReason> {
        let lexer = Lexer::new(text);
        let input = StrategyInput {
            tokens: lexer.tokens(),
            text,
            expect_episode: true,
            vocabulary: QualityVocabulary::default_registry(),
        };
        let hit = numbering::resolve(&input);
        evaluate(lexer.tokens(), hit.as_ref(), strict_name)
    }

    #[test]
    fn test_single_episode_passes() {
        assert_eq!(check("S02E03 -GRP", false), None);
        assert_eq!(check("Season 2 Episode 3", false), None);
    }

    #[test]
    fn test_disc_release_rejected() {
        assert_eq!(check("S02D1", false), Some(RejectReason::DiscRelease));
    }

    #[test]
    fn test_season_packs_rejected() {
        assert_eq!(check("Season 2", false), Some(RejectReason::SeasonPack));
        assert_eq!(check("S6", false), Some(RejectReason::SeasonPack));
        assert_eq!(check("Complete Season 2", false), Some(RejectReason::SeasonPack));
        assert_eq!(check("Seasons 1 & 2", false), Some(RejectReason::SeasonPack));
        assert_eq!(check("1xAll", false), Some(RejectReason::SeasonPack));
    }

    #[test]
    fn test_episode_ranges_rejected() {
        assert_eq!(check("S6 E1-4", false), Some(RejectReason::SeasonPack));
        assert_eq!(check("S01E01-E04", false), Some(RejectReason::SeasonPack));
    }

    #[test]
    fn test_digit_leading_group_is_not_a_range() {
        assert_eq!(check("S02E04 XviD-2HD eztv", false), None);
        assert_eq!(check("S6 E2-2HD", false), None);
    }

    #[test]
    fn test_complete_needs_a_season_token_next_to_it() {
        assert_eq!(check("S01E02 The Complete Truth -GRP", false), None);
        assert_eq!(check("Complete Season 2", false), Some(RejectReason::SeasonPack));
        assert_eq!(check("Season 2 Complete", false), Some(RejectReason::SeasonPack));
    }

    #[test]
    fn test_strict_name_rejects_stray_words() {
        assert_eq!(
            check("Extras S01E02", true),
            Some(RejectReason::StrictNameMismatch)
        );
        assert_eq!(check("S01E02 -GRP", true), None);
    }
}
