//! Case query value object and the character allow-list validator

use super::error::QueryError;
use serde::{Deserialize, Serialize};

/// Check a raw query against the allow-list `^[A-Za-z0-9\s/-]*$`.
///
/// `\s` is the ECMAScript whitespace set (see [`is_query_whitespace`]), not
/// Rust's `char::is_whitespace`. The empty string passes; emptiness is the caller's concern
/// (see [`CaseQuery::parse`]). Runs on every keystroke in interactive views
/// and again right before dispatch.
pub fn validate_query(raw: &str) -> Result<(), QueryError> {
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || is_query_whitespace(c) || c == '/' || c == '-';
    if raw.chars().all(allowed) {
        Ok(())
    } else {
        Err(QueryError::DisallowedCharacters)
    }
}

/// ECMAScript `\s`: Unicode `White_Space` without U+0085 (NEXT LINE), plus
/// U+FEFF (BYTE ORDER MARK).
pub fn is_query_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// A validated single-case query: case number, CNR, or party name (Value Object)
///
/// Constructed fresh per search and never persisted. The original text is kept
/// verbatim (no trimming) so it is interpolated into the prompt exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseQuery {
    content: String,
}

impl CaseQuery {
    /// Validate and wrap a raw query.
    ///
    /// Whitespace-only input is rejected as [`QueryError::Empty`]; anything
    /// outside the allow-list as [`QueryError::DisallowedCharacters`].
    pub fn parse(raw: impl Into<String>) -> Result<Self, QueryError> {
        let content = raw.into();
        if content.trim().is_empty() {
            return Err(QueryError::Empty);
        }
        validate_query(&content)?;
        Ok(Self { content })
    }

    /// Get the query text
    pub fn as_str(&self) -> &str {
        &self.content
    }

}

impl std::fmt::Display for CaseQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for CaseQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CaseQuery {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CaseQuery> for String {
    fn from(query: CaseQuery) -> Self {
        query.content
    }
}
