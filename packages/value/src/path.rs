//! Resource paths - the document store's addressing model.

use std::fmt;

/// A slash-delimited resource name as returned by the store.
///
/// The final segment is the document's short id; everything before it is
/// collection/parent context. Full paths look like
/// `projects/p/databases/(default)/documents/quizzes/abc123`.
///
/// Parsing never fails: empty strings and repeated slashes normalize to
/// fewer segments, and an empty path has an empty document id.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Parse a resource name into segments.
    ///
    /// Empty segments are dropped, so `foo//bar/` parses the same as
    /// `foo/bar`.
    pub fn parse(s: &str) -> Self {
        let segments = s
            .split('/')
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect();
        ResourcePath { segments }
    }

    /// The document's short id: the final segment, or `""` for an empty
    /// path.
    pub fn document_id(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The id of the collection holding the document: the second-to-last
    /// segment, if there is one.
    pub fn collection_id(&self) -> Option<&str> {
        if self.segments.len() < 2 {
            return None;
        }
        self.segments
            .get(self.segments.len() - 2)
            .map(String::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
