/*
[INPUT]:  Error sources (key material, signing, HTTP, decoding, configuration)
[OUTPUT]: Structured error types for every failure kind of a signed call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::path::PathBuf;

use thiserror::Error;

/// Private key could not be loaded
#[derive(Error, Debug)]
pub enum KeyError {
    /// Key file could not be read
    #[error("Cannot read private key {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No PEM block, or the block is neither PKCS#1 nor PKCS#8
    #[error("Malformed private key: {0}")]
    Malformed(String),

    /// PKCS#8 container holds something other than an RSA key
    #[error("Unsupported private key type: expected RSA, got {0}")]
    UnsupportedKeyType(String),
}

/// Signature primitive failed
#[derive(Error, Debug)]
pub enum SignError {
    #[error("Digest failure: {0}")]
    DigestFailure(String),

    #[error("Signature failure: {0}")]
    SignatureFailure(#[source] rsa::Error),
}

/// Transport succeeded but the body did not match the expected shape
#[derive(Error, Debug)]
#[error("Cannot decode response (HTTP {status}): {source}; body: {body}")]
pub struct DecodeError {
    pub status: u16,
    pub body: String,
    #[source]
    pub source: serde_json::Error,
}

/// Access token acquisition failed
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token request key error: {0}")]
    Key(#[from] KeyError),

    #[error("Token request signing error: {0}")]
    Sign(#[from] SignError),

    #[error("Invalid token URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Token response: {0}")]
    Decode(#[from] DecodeError),
}

/// Authenticated resource call failed
#[derive(Error, Debug)]
pub enum RequestError {
    /// Token acquisition failed before the call was signed
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Request key error: {0}")]
    Key(#[from] KeyError),

    #[error("Request signing error: {0}")]
    Sign(#[from] SignError),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request body serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response: {0}")]
    Decode(#[from] DecodeError),
}

/// Main error type for the GDC adapter
#[derive(Error, Debug)]
pub enum GdcError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// API returned an error envelope
    #[error("API error (code {code}): {message}")]
    Api { code: String, message: String },

    /// Transfer amount is not a decimal number
    #[error("Invalid amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GdcError {
    /// Check if the failure happened while acquiring the access token
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            GdcError::Auth(_) | GdcError::Request(RequestError::Auth(_))
        )
    }

    /// Create an API error from an envelope code and message
    pub fn api_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        GdcError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for GDC operations
pub type Result<T> = std::result::Result<T, GdcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        let auth = GdcError::Request(RequestError::Auth(AuthError::Key(KeyError::Malformed(
            "no PEM block".to_string(),
        ))));
        assert!(auth.is_auth_error());

        let request = GdcError::Request(RequestError::Key(KeyError::Malformed(
            "no PEM block".to_string(),
        )));
        assert!(!request.is_auth_error());
        assert!(!GdcError::Config("missing".to_string()).is_auth_error());
    }

    #[test]
    fn test_auth_error_is_transparent_in_request_error() {
        let inner = AuthError::Key(KeyError::UnsupportedKeyType("1.3.101.112".to_string()));
        let message = inner.to_string();
        let wrapped = RequestError::from(inner);
        assert_eq!(wrapped.to_string(), message);
    }

    #[test]
    fn test_api_error_creation() {
        let err = GdcError::api_error("4017300", "Unauthorized. Invalid Signature");
        match err {
            GdcError::Api { code, message } => {
                assert_eq!(code, "4017300");
                assert_eq!(message, "Unauthorized. Invalid Signature");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err();
        let err = DecodeError {
            status: 502,
            body: "<html>".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("HTTP 502"));
        assert!(message.contains("<html>"));
    }
}
