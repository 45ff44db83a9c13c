//! Term syntax and matching.
//!
//! A term is a single token or a double-quoted multi-word phrase; matching is
//! case-insensitive substring search, so phrases only match contiguously.

use aho_corasick::AhoCorasick;

use super::error::ConfigError;

/// One parsed, lowercased search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(String);

impl Term {
    /// Parse a single term, rejecting empty input.
    pub fn new(text: impl Into<String>) -> Result<Self, ConfigError> {
        let text: String = text.into();
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ConfigError::EmptyTerm { input: text });
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the term is a multi-word phrase.
    #[must_use]
    pub fn is_phrase(&self) -> bool {
        self.0.contains(' ')
    }
}

/// A set of terms with a prebuilt multi-pattern matcher.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: Vec<Term>,
    matcher: Option<AhoCorasick>,
}

impl TermSet {
    /// Build a set from already-parsed terms.
    pub fn new(terms: Vec<Term>) -> Result<Self, ConfigError> {
        let matcher = if terms.is_empty() {
            None
        } else {
            let patterns = terms.iter().map(Term::as_str);
            Some(
                AhoCorasick::new(patterns).map_err(|err| ConfigError::Matcher {
                    reason: err.to_string(),
                })?,
            )
        };
        Ok(Self { terms, matcher })
    }

    /// Parse a whitespace-separated term list with double-quoted phrases.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        Self::new(parse_terms(input)?)
    }

    /// Parse each element of a list as one term (phrases need no quotes).
    pub fn from_strings<I, S>(inputs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = inputs
            .into_iter()
            .map(Term::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(terms)
    }

    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether any term occurs in the given lowercase text.
    #[must_use]
    pub fn any_match(&self, text_lc: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(text_lc))
    }

    /// Whether any term occurs in at least one of the given lowercase texts.
    #[must_use]
    pub fn any_match_in(&self, texts_lc: &[&str]) -> bool {
        texts_lc.iter().any(|text| self.any_match(text))
    }

    /// Whether every term occurs in at least one of the given lowercase
    /// texts. An empty set trivially matches: no requirement.
    #[must_use]
    pub fn all_match_in(&self, texts_lc: &[&str]) -> bool {
        self.terms
            .iter()
            .all(|term| texts_lc.iter().any(|text| text.contains(term.as_str())))
    }
}

/// Split an input line into terms, honoring double-quoted phrases.
fn parse_terms(input: &str) -> Result<Vec<Term>, ConfigError> {
    let mut terms = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        let raw = if ch == '"' {
            let mut phrase = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(inner) => phrase.push(inner),
                    None => {
                        return Err(ConfigError::UnterminatedPhrase {
                            input: input.to_string(),
                        });
                    }
                }
            }
            phrase
        } else {
            let mut token = String::from(ch);
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    break;
                }
                token.push(next);
                chars.next();
            }
            token
        };
        if raw.trim().is_empty() {
            return Err(ConfigError::EmptyTerm {
                input: input.to_string(),
            });
        }
        terms.push(Term::new(raw)?);
    }
    Ok(terms)
}
