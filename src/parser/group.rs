//! Release group extraction.

use std::ops::Range;

use crate::lexer::Token;

/// The release group, preferring a trailing `-GROUP` over a leading
/// `[GROUP]` tag. When an allow-list is given and the extracted group is on
/// it, the allow-list spelling is reported; a group off the list is still
/// reported as-is, since the list is advisory metadata.
pub(crate) fn extract(
    tokens: &[(Token<'_>, Range<usize>)],
    prefix_group: Option<String>,
    allow_groups: &[String],
) -> Option<String> {
    let trailing = match tokens {
        [.., (Token::Hyphen, _), (Token::Word(word), _)] => Some((*word).to_string()),
        _ => None,
    };
    let group = trailing.or(prefix_group)?;

    let listed = allow_groups
        .iter()
        .find(|allowed| allowed.eq_ignore_ascii_case(&group));
    match listed {
        Some(spelling) => Some(spelling.clone()),
        None => Some(group),
    }
}
