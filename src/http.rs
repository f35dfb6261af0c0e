//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, header};
use thiserror::Error;

/// Builds an HTTP client that identifies itself with the given user agent.
pub fn client(user_agent: &str) -> Client {
    ClientBuilder::new()
        .user_agent(user_agent)
        .build()
        // Better error handling? According to the docs, build() only
        // fails if a TLS backend cannot be initialized, or if DNS
        // resolution cannot be initialized, and both of these seem
        // like unrecoverable errors for us.
        .expect("could not create a new HTTP client")
}

/// An appropriate user agent to use when making HTTP requests.
pub fn default_user_agent() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An error that occurred while making an HTTP request.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),

    /// The remote service rejected the supplied credentials.
    #[error("Authentication rejected: {0}")]
    Auth(String),
}
