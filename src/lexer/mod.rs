//! Logos-based lexer for the post-name remainder of a title.
//!
//! Tokenization uses the [logos](https://docs.rs/logos) crate, which
//! generates a fast lexer from regex patterns at compile time. The numbering
//! strategies and the validity checks both operate on the token stream
//! produced here.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// A lexer over the normalized remainder of a release title.
///
/// The input must already be normalized: separator characters mapped to
/// spaces and quality tokens blanked out. Characters no pattern covers
/// (stray `&` or `!`) are dropped rather than reported as errors.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
}

impl<'src> Lexer<'src> {
    /// Tokenize the entire input string immediately.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        Self { tokens }
    }

    /// All tokens with their byte spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }
}
