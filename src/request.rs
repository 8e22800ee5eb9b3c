//! Parse request configuration.

use crate::model::RequestError;
use crate::vocab::QualityVocabulary;

/// One parse request: the series being looked for plus the raw title and
/// any matching options.
///
/// Use the builder to create a request:
///
/// ```
/// use episodic::ParseRequest;
///
/// let request = ParseRequest::builder("Some Series", "Some.Series.S02E03.720p-GRP")
///     .strict_name(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct ParseRequest {
    /// The series name to look for at the start of the title.
    pub name: String,

    /// The raw release title to parse.
    pub data: String,

    /// Reject titles with extra words between the name and the numbering.
    /// Default: false
    pub strict_name: bool,

    /// Whether the series is expected to carry season/episode numbering.
    /// When false, a bare number is read as a sequence identifier instead
    /// of a concatenated season+episode.
    /// Default: false
    pub expect_episode: bool,

    /// Release groups to match against, case-insensitively. Empty means
    /// any group is acceptable.
    pub allow_groups: Vec<String>,

    /// Quality token vocabulary. Default: the built-in registry.
    pub vocabulary: &'static QualityVocabulary,
}

impl ParseRequest {
    /// Create a request builder.
    pub fn builder(name: impl Into<String>, data: impl Into<String>) -> ParseRequestBuilder {
        ParseRequestBuilder {
            name: name.into(),
            data: data.into(),
            strict_name: None,
            expect_episode: None,
            allow_groups: Vec::new(),
            vocabulary: None,
        }
    }

    /// A request with all defaults.
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Result<Self, RequestError> {
        Self::builder(name, data).build()
    }
}

/// Builder for `ParseRequest`.
#[derive(Debug)]
pub struct ParseRequestBuilder {
    name: String,
    data: String,
    strict_name: Option<bool>,
    expect_episode: Option<bool>,
    allow_groups: Vec<String>,
    vocabulary: Option<&'static QualityVocabulary>,
}

impl ParseRequestBuilder {
    /// Require the numbering to follow the series name immediately.
    ///
    /// With strict matching, "Some Series Special S01E01" does not match the
    /// series "Some Series".
    pub fn strict_name(mut self, enabled: bool) -> Self {
        self.strict_name = Some(enabled);
        self
    }

    /// Set whether the series uses season/episode numbering.
    ///
    /// Enable this for series where a bare digit run like "706" should be
    /// split into season 7, episode 6; leave it off for series identified
    /// by a running sequence number, such as "Show 77". Default: false.
    pub fn expect_episode(mut self, enabled: bool) -> Self {
        self.expect_episode = Some(enabled);
        self
    }

    /// Restrict matches to the given release groups.
    ///
    /// Matching is case-insensitive; the group is reported with the
    /// spelling from this list.
    pub fn allow_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Use a custom quality vocabulary instead of the built-in one.
    pub fn vocabulary(mut self, vocabulary: &'static QualityVocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Build the request, validating that both name and title are present.
    pub fn build(self) -> Result<ParseRequest, RequestError> {
        if self.name.trim().is_empty() {
            return Err(RequestError::InvalidArgument("series name is empty"));
        }
        if self.data.trim().is_empty() {
            return Err(RequestError::InvalidArgument("release title is empty"));
        }
        Ok(ParseRequest {
            name: self.name,
            data: self.data,
            strict_name: self.strict_name.unwrap_or(false),
            expect_episode: self.expect_episode.unwrap_or(false),
            allow_groups: self.allow_groups,
            vocabulary: self
                .vocabulary
                .unwrap_or_else(QualityVocabulary::default_registry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = ParseRequest::new("Show", "Show.S01E01").unwrap();
        assert!(!request.strict_name);
        assert!(!request.expect_episode);
        assert!(request.allow_groups.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let request = ParseRequest::builder("Show", "Show.706")
            .strict_name(true)
            .expect_episode(true)
            .allow_groups(["FooBar"])
            .build()
            .unwrap();

        assert!(request.strict_name);
        assert!(request.expect_episode);
        assert_eq!(request.allow_groups, vec!["FooBar".to_string()]);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(ParseRequest::new("", "Show.S01E01").is_err());
        assert!(ParseRequest::new("Show", "   ").is_err());
    }
}
