//! Blocking HTTP transport for oEmbed lookups

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("Unexpected status {status}")]
    Status { status: u16 },
    #[error("Unreadable body: {message}")]
    Body { message: String },
}

/// Only 2xx replies carry an oEmbed document
pub fn check_status(status: u16) -> Result<(), HttpError> {
    match status {
        200..=299 => Ok(()),
        429 => Err(HttpError::RateLimited),
        status => Err(HttpError::Status { status }),
    }
}

#[cfg(feature = "native")]
pub use native::HttpClient;

#[cfg(feature = "native")]
mod native {
    use super::{check_status, HttpError};
    use reqwest::blocking::Client;
    use reqwest::Url;
    use std::time::Duration;

    /// One-shot GET client with a fixed timeout and user agent.
    ///
    /// Uses `reqwest::blocking`; do not call it from inside an async runtime.
    pub struct HttpClient {
        client: Client,
    }

    impl HttpClient {
        pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, HttpError> {
            let client = Client::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| HttpError::RequestFailed {
                    message: e.to_string(),
                })?;
            Ok(Self { client })
        }

        /// GET `endpoint` with `query` appended and return the body of a 2xx reply
        pub fn get_text(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String, HttpError> {
            let url = Url::parse_with_params(endpoint, query).map_err(|_| HttpError::InvalidUrl {
                url: endpoint.to_string(),
            })?;

            let response = self.client.get(url).send().map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout
                } else {
                    HttpError::RequestFailed {
                        message: e.to_string(),
                    }
                }
            })?;

            check_status(response.status().as_u16())?;

            response.text().map_err(|e| HttpError::Body {
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
    }

    #[test]
    fn test_error_statuses() {
        assert!(matches!(check_status(429), Err(HttpError::RateLimited)));
        assert!(matches!(check_status(404), Err(HttpError::Status { status: 404 })));
        assert!(matches!(check_status(503), Err(HttpError::Status { status: 503 })));
        assert!(matches!(check_status(301), Err(HttpError::Status { status: 301 })));
    }
}
