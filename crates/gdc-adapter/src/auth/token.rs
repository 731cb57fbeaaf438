/*
[INPUT]:  Client identity (client key, private key path) and HTTP client
[OUTPUT]: Access token responses from the client-credentials exchange
[POS]:    Auth layer - token acquisition for authenticated calls
[UPDATE]: When token endpoint, headers, or canonical form change
*/

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::http::signature::{
    HEADER_CLIENT_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP, sign_canonical, token_canonical,
};
use crate::http::{AuthError, GdcClient};
use crate::types::responses::null_default;
use crate::types::{AccessTokenRequest, ApiResponse};

pub const ACCESS_TOKEN_PATH: &str = "/v1.0/auth/access-token";

/// Bearer token issued by the client-credentials exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "accessToken", default, deserialize_with = "null_default")]
    pub access_token: String,
    /// Lifetime in seconds
    #[serde(rename = "expiresIn", default, deserialize_with = "null_default")]
    pub expires_in: i64,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub token_type: String,
}

impl GdcClient {
    /// Exchange client credentials for an access token
    ///
    /// POST /v1.0/auth/access-token
    /// Signs "{client_key}|{timestamp}"; an error envelope in the response is
    /// returned as data, only key/signing/transport failures are errors.
    pub async fn get_access_token(&self) -> Result<ApiResponse<AccessToken>, AuthError> {
        let timestamp = self.timestamp();
        let url = self.endpoint(ACCESS_TOKEN_PATH)?;
        let identity = self.identity();

        let canonical = token_canonical(&identity.client_key, &timestamp);
        let signature = sign_canonical::<AuthError>(&identity.private_key_path, &canonical)
            .inspect_err(|err| {
                error!(url = %url, activity = "sign request", to_sign = %canonical, error = %err, "failed to sign token request");
            })?;

        let builder = self
            .http_client()
            .post(url.clone())
            .header(HEADER_CLIENT_KEY, &identity.client_key)
            .header(HEADER_TIMESTAMP, &timestamp)
            .header(HEADER_SIGNATURE, &signature)
            .json(&AccessTokenRequest::default());

        self.dispatch(builder, &url, None, &timestamp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::auth::{load_private_key, verify};
    use crate::http::{ClientIdentity, KeyError};

    fn key_path() -> String {
        format!("{}/tests/fixtures/rsa_pkcs1.pem", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_access_token_wire_names() {
        let token: AccessToken = serde_json::from_str(
            r#"{"accessToken": "abc", "expiresIn": 900, "type": "Bearer"}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 900);
        assert_eq!(token.token_type, "Bearer");
    }

    #[test]
    fn test_access_token_null_fields_decode_as_defaults() {
        let response: ApiResponse<AccessToken> = serde_json::from_str(
            r#"{"responseCode": "4017300", "responseMessage": "Unauthorized", "accessToken": null, "expiresIn": null, "type": null}"#,
        )
        .unwrap();
        assert!(response.is_error());
        assert_eq!(response.data, AccessToken::default());
    }

    #[tokio::test]
    async fn test_get_access_token_signs_client_key_and_timestamp() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCESS_TOKEN_PATH))
            .and(header("Client-Key", "CK1"))
            .and(header_exists("X-Timestamp"))
            .and(header_exists("X-Signature"))
            .and(body_json(serde_json::json!({ "grantType": "client_credentials" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "TOK",
                "expiresIn": 900,
                "type": "Bearer",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GdcClient::new(ClientIdentity::new(server.uri(), "CK1", key_path())).unwrap();
        let response = client.get_access_token().await.unwrap();
        assert!(!response.is_error());
        assert_eq!(response.data.access_token, "TOK");

        let requests = server.received_requests().await.unwrap();
        let request = &requests[0];
        let timestamp = request.headers.get("X-Timestamp").unwrap().to_str().unwrap();
        let signature = request.headers.get("X-Signature").unwrap().to_str().unwrap();

        let public = load_private_key(key_path()).unwrap().to_public_key();
        assert!(verify(&public, &format!("CK1|{timestamp}"), signature));
    }

    #[tokio::test]
    async fn test_get_access_token_returns_envelope_as_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCESS_TOKEN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "responseCode": "4017300",
                "responseMessage": "Unauthorized. Invalid Signature",
            })))
            .mount(&server)
            .await;

        let client = GdcClient::new(ClientIdentity::new(server.uri(), "CK1", key_path())).unwrap();
        let response = client.get_access_token().await.unwrap();
        assert!(response.is_error());
        assert_eq!(response.error.response_code.as_deref(), Some("4017300"));
        assert_eq!(response.data, AccessToken::default());
    }

    #[tokio::test]
    async fn test_get_access_token_with_null_token_returns_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCESS_TOKEN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "responseCode": "4017300",
                "responseMessage": "Unauthorized. Invalid Client Key",
                "accessToken": null,
                "expiresIn": null,
            })))
            .mount(&server)
            .await;

        let client = GdcClient::new(ClientIdentity::new(server.uri(), "CK1", key_path())).unwrap();
        let response = client.get_access_token().await.unwrap();
        assert!(response.is_error());
        assert_eq!(response.data.access_token, "");
    }

    #[tokio::test]
    async fn test_get_access_token_fails_on_missing_key_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let missing = Path::new("/nonexistent/gdc/key.pem");
        let client = GdcClient::new(ClientIdentity::new(server.uri(), "CK1", missing)).unwrap();
        let err = client.get_access_token().await.unwrap_err();
        assert!(matches!(err, AuthError::Key(KeyError::Unreadable { .. })));
    }

    #[tokio::test]
    async fn test_get_access_token_decode_error_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCESS_TOKEN_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = GdcClient::new(ClientIdentity::new(server.uri(), "CK1", key_path())).unwrap();
        match client.get_access_token().await {
            Err(AuthError::Decode(err)) => {
                assert_eq!(err.status, 502);
                assert_eq!(err.body, "<html>Bad Gateway</html>");
            }
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }
}
