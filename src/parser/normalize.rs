//! Title normalization and series name matching.
//!
//! The normalizer turns a raw release title into a clean, space-separated
//! string, peels off leading group tags and quality banners, drops bracketed
//! checksum groups, and locates the expected series name at the front. The
//! remaining suffix is what the quality extractor and numbering strategies
//! operate on.

use crate::model::Quality;
use crate::vocab::QualityVocabulary;

/// Separator characters that become spaces.
fn map_separator(c: char) -> char {
    match c {
        '.' | '_' | ',' | ':' | '[' | ']' | '(' | ')' => ' ',
        c => c,
    }
}

/// Lowercase a bracket-tag or banner token and map its separators, so it can
/// be looked up in the vocabulary.
fn normalize_token(token: &str) -> String {
    let mapped: String = token
        .chars()
        .map(|c| match c {
            '.' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for bracket contents that look like a CRC or info-hash fragment.
fn looks_like_checksum(inner: &str) -> bool {
    (6..=8).contains(&inner.len()) && inner.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Result of normalizing one title against a series name.
#[derive(Debug)]
pub(crate) struct Normalized {
    /// Cleaned text following the series name, original case preserved.
    pub suffix: String,
    /// Whether the series name was found at the start of the title.
    pub name_found: bool,
    /// Group taken from a leading `[Group]` tag.
    pub prefix_group: Option<String>,
    /// Quality taken from a leading `[720p]` tag or an `HD 720p:` banner.
    pub banner_quality: Option<Quality>,
}

pub(crate) fn normalize(data: &str, name: &str, vocab: &QualityVocabulary) -> Normalized {
    let mut rest = data.trim();
    let mut prefix_group = None;
    let mut banner_quality = None;

    // Leading [tag] is either a quality banner, a checksum, or the group.
    if let Some(stripped) = rest.strip_prefix('[') {
        if let Some(end) = stripped.find(']') {
            let inner = &stripped[..end];
            let token = normalize_token(inner);
            if let Some(quality) = vocab.lookup(&token) {
                banner_quality = Some(quality);
            } else if !inner.is_empty() && !looks_like_checksum(inner) {
                prefix_group = Some(inner.to_string());
            }
            rest = stripped[end + 1..].trim_start();
        }
    }

    // An early colon after nothing but quality words ("HD 720p: ...") is a
    // banner, not part of the title.
    if let Some(colon) = rest.find(':') {
        if colon > 0 && colon < 16 {
            if let Some(quality) = banner_head_quality(&rest[..colon], vocab) {
                let better = match banner_quality {
                    Some(existing) => vocab.priority_of(quality) < vocab.priority_of(existing),
                    None => true,
                };
                if better {
                    banner_quality = Some(quality);
                }
                rest = rest[colon + 1..].trim_start();
            }
        }
    }

    // Map separators to spaces, dropping bracketed checksum groups whole.
    let mut mapped = String::with_capacity(rest.len());
    let mut i = 0;
    while let Some(ch) = rest[i..].chars().next() {
        if ch == '[' {
            if let Some(off) = rest[i + 1..].find(']') {
                if looks_like_checksum(&rest[i + 1..i + 1 + off]) {
                    i += off + 2;
                    continue;
                }
            }
        }
        mapped.push(map_separator(ch));
        i += ch.len_utf8();
    }
    let cleaned = mapped.split_whitespace().collect::<Vec<_>>().join(" ");

    let name_clean = clean_name(name);
    let lower = cleaned.to_ascii_lowercase();
    let name_found = !name_clean.is_empty()
        && lower.starts_with(&name_clean)
        && lower[name_clean.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

    let suffix = if name_found {
        cleaned[name_clean.len()..].trim().to_string()
    } else {
        String::new()
    };

    Normalized {
        suffix,
        name_found,
        prefix_group,
        banner_quality,
    }
}

/// Lowercased series name with the same separator mapping applied to it.
fn clean_name(name: &str) -> String {
    let mapped: String = name.chars().map(map_separator).collect();
    mapped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// The banner head must consist only of "HD" and vocabulary tokens, with at
/// least one vocabulary hit. Returns the highest-priority quality found.
fn banner_head_quality(head: &str, vocab: &QualityVocabulary) -> Option<Quality> {
    let mut best: Option<Quality> = None;
    for token in head.split(|c: char| c == '.' || c == '_' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let token = token.to_ascii_lowercase();
        if token == "hd" {
            continue;
        }
        let quality = vocab.lookup(&token)?;
        best = Some(match best {
            Some(existing) if vocab.priority_of(existing) <= vocab.priority_of(quality) => existing,
            _ => quality,
        });
    }
    best
}
