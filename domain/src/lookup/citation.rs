//! Web sources cited by the grounded model

use serde::{Deserialize, Serialize};

/// Title used when the backend cites a page without one.
pub const DEFAULT_SOURCE_TITLE: &str = "Legal Portal";

/// One grounding chunk as reported by the backend; either part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingChunk {
    pub title: Option<String>,
    pub uri: Option<String>,
}

impl GroundingChunk {
    pub fn web(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            uri: Some(uri.into()),
        }
    }
}

/// A web page the answer was grounded on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub title: String,
    pub uri: String,
}

impl SourceCitation {
    /// Convert grounding chunks into citations, preserving order.
    ///
    /// Chunks without a URI (or with an empty one) are dropped; a missing or
    /// empty title becomes [`DEFAULT_SOURCE_TITLE`].
    pub fn from_chunks<'a, I>(chunks: I) -> Vec<SourceCitation>
    where
        I: IntoIterator<Item = &'a GroundingChunk>,
    {
        chunks
            .into_iter()
            .filter_map(|chunk| {
                let uri = chunk.uri.as_deref().filter(|u| !u.is_empty())?;
                let title = chunk
                    .title
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(DEFAULT_SOURCE_TITLE);
                Some(SourceCitation {
                    title: title.to_string(),
                    uri: uri.to_string(),
                })
            })
            .collect()
    }
}
