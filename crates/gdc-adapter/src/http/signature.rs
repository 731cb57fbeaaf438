/*
[INPUT]:  Client key, access token, request path, serialized body, timestamp
[OUTPUT]: Canonical strings and signature header values
[POS]:    HTTP layer - request signing for token and authenticated endpoints
[UPDATE]: When changing canonical string layout or header format
*/

use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::auth::{load_private_key, sign};
use crate::http::{KeyError, SignError};

pub const HEADER_CLIENT_KEY: &str = "Client-Key";
pub const HEADER_TIMESTAMP: &str = "X-Timestamp";
pub const HEADER_SIGNATURE: &str = "X-Signature";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";

/// `YYYY-MM-DDThh:mm:ss±hh:mm`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Render `instant` in `timezone` for the `X-Timestamp` header and canonical string
pub fn format_timestamp(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant
        .with_timezone(&timezone)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Canonical string for the access-token request
///
/// Format: "{client_key}|{timestamp}"
pub fn token_canonical(client_key: &str, timestamp: &str) -> String {
    format!("{client_key}|{timestamp}")
}

/// Canonical string for an authenticated resource call
///
/// Format: "{timestamp}|{access_token}|{path_and_query}|{encoded_body}"
pub fn request_canonical(
    timestamp: &str,
    access_token: &str,
    path: &str,
    encoded_body: &str,
) -> String {
    format!("{timestamp}|{access_token}|{path}|{encoded_body}")
}

/// Lowercase hex of the serialized body bytes
///
/// This is the bytes themselves, not a digest of them; the bank verifies
/// against exactly this form.
pub fn encode_body(payload: &[u8]) -> String {
    hex::encode(payload)
}

/// Load the key from `key_path` and sign `canonical` with it
pub fn sign_canonical<E>(key_path: &Path, canonical: &str) -> Result<String, E>
where
    E: From<KeyError> + From<SignError>,
{
    let key = load_private_key(key_path)?;
    Ok(sign(&key, canonical)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use rstest::rstest;

    use crate::auth::verify;
    use crate::http::RequestError;

    #[test]
    fn test_token_canonical() {
        assert_eq!(
            token_canonical("CK1", "2024-01-01T10:00:00+07:00"),
            "CK1|2024-01-01T10:00:00+07:00"
        );
    }

    #[test]
    fn test_get_canonical_has_trailing_empty_body() {
        assert_eq!(
            request_canonical("T", "TOK", "/v1.0/account/balance-inquiry", ""),
            "T|TOK|/v1.0/account/balance-inquiry|"
        );
    }

    #[test]
    fn test_encode_body_is_hex_not_hash() {
        let payload = serde_json::to_vec(&serde_json::json!({ "a": 1 })).unwrap();
        assert_eq!(payload, [0x7B, 0x22, 0x61, 0x22, 0x3A, 0x31, 0x7D]);
        assert_eq!(encode_body(&payload), "7b2261223a317d");
    }

    #[test]
    fn test_encode_body_round_trips_to_payload() {
        let payload = br#"{"remark":"Gaji Januari","amount":{"value":"10.00"}}"#;
        let encoded = encode_body(payload);
        assert_eq!(encoded, encoded.to_lowercase());
        assert_eq!(encoded.len(), payload.len() * 2);
        assert_eq!(hex::decode(&encoded).unwrap(), payload.to_vec());
    }

    #[rstest]
    #[case(chrono_tz::Asia::Jakarta, "2024-01-01T10:00:00+07:00")]
    #[case(chrono_tz::Asia::Makassar, "2024-01-01T11:00:00+08:00")]
    #[case(chrono_tz::UTC, "2024-01-01T03:00:00+00:00")]
    #[case(chrono_tz::America::New_York, "2023-12-31T22:00:00-05:00")]
    fn test_format_timestamp(#[case] timezone: Tz, #[case] expected: &str) {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap();
        assert_eq!(format_timestamp(instant, timezone), expected);
    }

    #[test]
    fn test_sign_canonical_verifies() {
        let key_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rsa_pkcs8.pem");
        let canonical = token_canonical("CK1", "2024-01-01T10:00:00+07:00");

        let signature = sign_canonical::<RequestError>(&key_path, &canonical).unwrap();

        let key = load_private_key(&key_path).unwrap();
        assert!(verify(&key.to_public_key(), &canonical, &signature));
    }

    #[test]
    fn test_sign_canonical_propagates_key_error() {
        let err = sign_canonical::<RequestError>(Path::new("/nonexistent/key.pem"), "x").unwrap_err();
        assert!(matches!(err, RequestError::Key(KeyError::Unreadable { .. })));
    }
}
