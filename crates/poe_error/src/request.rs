//! Request error types.

/// Errors from a chat completion request.
///
/// A failed call is terminal: the client never retries on its own, so
/// every variant reaches the caller.
#[derive(Debug, Clone, derive_more::Display)]
pub enum RequestError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error (status {}): {}", status, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body text, when retrievable
        body: String,
    },

    /// Failed to parse response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Builder error
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl std::error::Error for RequestError {}
