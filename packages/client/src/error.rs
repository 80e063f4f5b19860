/// Failures surfaced by the collection client.
///
/// "Document does not exist" is not an error: `get_one` returns
/// `Ok(None)` for a 404, so a missing document can never be mistaken
/// for a failed request.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The store rejected or failed to service the request. Carries the
    /// upstream HTTP status and the raw error body.
    #[error("store error (HTTP {status}): {details}")]
    Store { status: u16, details: String },

    /// The exchange itself failed: DNS, connection refused, timeout.
    /// Propagated from every operation, list and point reads alike.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body is not the documented shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid base URL or path join.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}
