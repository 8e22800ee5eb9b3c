//! Quality token extraction and blanking.
//!
//! Quality and sound tokens are found before any numbering runs, then
//! blanked out of the working text so their digits (720p, AC3, DD5.1) can
//! never be mistaken for season or episode numbers.

use crate::model::Quality;
use crate::vocab::QualityVocabulary;

/// Output of the quality pass: the best quality found and the suffix with
/// every quality and sound token blanked to spaces.
#[derive(Debug)]
pub(crate) struct QualityScan {
    pub text: String,
    pub quality: Quality,
}

pub(crate) fn extract(
    suffix: &str,
    banner: Option<Quality>,
    vocab: &QualityVocabulary,
) -> QualityScan {
    let mut cased = suffix.as_bytes().to_vec();
    let mut lower = suffix.to_ascii_lowercase().into_bytes();
    let mut scanned: Option<Quality> = None;

    for token in vocab.priority_tokens() {
        if blank_all(&mut lower, &mut cased, token) && scanned.is_none() {
            scanned = vocab.lookup(token);
        }
    }

    // Longest first so "dd5 1" is consumed before any shorter overlap.
    let mut sounds: Vec<_> = vocab.sound_tokens().collect();
    sounds.sort_by_key(|s| std::cmp::Reverse(s.len()));
    for token in sounds {
        blank_all(&mut lower, &mut cased, token);
    }

    let quality = match (banner, scanned) {
        (Some(b), Some(s)) if vocab.priority_of(s) < vocab.priority_of(b) => s,
        (Some(b), _) => b,
        (None, Some(s)) => s,
        (None, None) => Quality::Unknown,
    };

    QualityScan {
        text: String::from_utf8_lossy(&cased).into_owned(),
        quality,
    }
}

/// Blank every boundary-delimited occurrence of `token` in both buffers.
/// Returns true when at least one occurrence was blanked.
fn blank_all(lower: &mut [u8], cased: &mut [u8], token: &str) -> bool {
    let needle = token.as_bytes();
    let mut found = false;
    let mut i = 0;
    while i + needle.len() <= lower.len() {
        if &lower[i..i + needle.len()] == needle && at_boundary(lower, i, i + needle.len()) {
            for j in i..i + needle.len() {
                lower[j] = b' ';
                cased[j] = b' ';
            }
            found = true;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    found
}

fn at_boundary(buf: &[u8], start: usize, end: usize) -> bool {
    let before = start == 0 || !buf[start - 1].is_ascii_alphanumeric();
    let after = end == buf.len() || !buf[end].is_ascii_alphanumeric();
    before && after
}
