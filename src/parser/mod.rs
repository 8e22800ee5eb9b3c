//! The parsing pipeline.
//!
//! A title flows through five stages: normalization and name matching,
//! quality extraction, numbering resolution, validity checks, and group
//! composition. Each stage lives in its own module and is tested on its
//! own; this module only wires them together.

pub(crate) mod group;
pub(crate) mod normalize;
pub(crate) mod numbering;
pub(crate) mod quality;
pub(crate) mod validity;

use crate::lexer::{Lexer, Token};
use crate::model::{ParseResult, RejectReason};
use crate::request::ParseRequest;

pub(crate) fn run(request: &ParseRequest) -> ParseResult {
    let span = tracing::debug_span!("parse", name = %request.name);
    let _guard = span.enter();

    let normalized = normalize::normalize(&request.data, &request.name, request.vocabulary);
    if !normalized.name_found {
        tracing::debug!(data = %request.data, "series name not found in title");
        return ParseResult::rejected(&request.name, RejectReason::NameMismatch);
    }

    let scan = quality::extract(&normalized.suffix, normalized.banner_quality, request.vocabulary);
    let lexer = Lexer::new(&scan.text);
    let tokens = lexer.tokens();

    let proper_or_repack = tokens
        .iter()
        .any(|(token, _)| matches!(token, Token::ProperWord(_)));

    let input = numbering::StrategyInput {
        tokens,
        text: &scan.text,
        expect_episode: request.expect_episode,
        vocabulary: request.vocabulary,
    };
    let hit = numbering::resolve(&input);

    let group = group::extract(tokens, normalized.prefix_group, &request.allow_groups);

    let reject = validity::evaluate(tokens, hit.as_ref(), request.strict_name);

    match (hit, reject) {
        (Some(hit), None) => ParseResult {
            name: request.name.clone(),
            valid: true,
            season: hit.outcome.season(),
            episode: hit.outcome.episode(),
            identifier: hit.outcome.identifier(),
            quality: scan.quality,
            proper_or_repack,
            group,
            reject_reason: None,
        },
        (_, reject) => {
            let reason = reject.unwrap_or(RejectReason::NoEpisodeNumber);
            tracing::debug!(%reason, "title rejected");
            let mut result = ParseResult::rejected(&request.name, reason);
            result.quality = scan.quality;
            result.proper_or_repack = proper_or_repack;
            result.group = group;
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quality;

    fn parse(name: &str, data: &str) -> ParseResult {
        let request = ParseRequest::new(name, data).unwrap();
        run(&request)
    }

    #[test]
    fn test_full_pipeline_happy_path() {
        let result = parse("Some Show", "Some.Show.S02E03.720p.HDTV-GRP");
        assert!(result.valid);
        assert_eq!(result.season, Some(2));
        assert_eq!(result.episode, Some(3));
        assert_eq!(result.identifier, "S02E03");
        assert_eq!(result.quality, Quality::_720p);
        assert_eq!(result.group.as_deref(), Some("GRP"));
    }

    #[test]
    fn test_name_mismatch_short_circuits() {
        let result = parse("Other Show", "Some.Show.S02E03");
        assert!(!result.valid);
        assert_eq!(result.reject_reason, Some(RejectReason::NameMismatch));
    }

    #[test]
    fn test_rejections_keep_recovered_fields() {
        let result = parse("Some Show", "Some.Show.Season.2.720p-GRP");
        assert!(!result.valid);
        assert_eq!(result.reject_reason, Some(RejectReason::SeasonPack));
        assert_eq!(result.quality, Quality::_720p);
        assert_eq!(result.group.as_deref(), Some("GRP"));
    }

    #[test]
    fn test_no_numbering_found() {
        let result = parse("Some Show", "Some.Show.Christmas.Special.720p");
        assert!(!result.valid);
        assert_eq!(result.reject_reason, Some(RejectReason::NoEpisodeNumber));
        assert_eq!(result.quality, Quality::_720p);
    }

    #[test]
    fn test_proper_flag() {
        let result = parse("Some Show", "Some.Show.S02E03.PROPER.720p-GRP");
        assert!(result.valid);
        assert!(result.proper_or_repack);
    }
}
