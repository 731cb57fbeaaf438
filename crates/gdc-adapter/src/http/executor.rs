/*
[INPUT]:  Method, path, optional JSON body, optional pinned access token
[OUTPUT]: Decoded response bodies or propagated request errors
[POS]:    HTTP layer - signed request execution for authenticated endpoints
[UPDATE]: When changing header assembly, dispatch, or response decoding
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::http::client::RequestScope;
use crate::http::signature::{
    HEADER_REQUEST_ID, HEADER_SIGNATURE, HEADER_TIMESTAMP, encode_body, request_canonical,
    sign_canonical,
};
use crate::http::{DecodeError, GdcClient, RequestError};

impl GdcClient {
    /// Run one authenticated call
    ///
    /// 1. Use the pinned token, or acquire one
    /// 2. Capture a single timestamp for signature and header
    /// 3. Serialize and hex-encode the body (empty segment without body)
    /// 4. Sign the canonical string
    /// 5. Send with `Authorization`, `X-Request-Id`, `X-Timestamp`, `X-Signature`
    ///
    /// The token is owned by this call and dropped when it returns.
    pub(crate) async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        pinned_token: Option<String>,
    ) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let access_token = match pinned_token {
            Some(token) => token,
            None => {
                let response = self.get_access_token().await?;
                if response.is_error() {
                    warn!(
                        response_code = response.error.response_code.as_deref().unwrap_or_default(),
                        response_message = response.error.response_message.as_deref().unwrap_or_default(),
                        "access token response carries an error envelope"
                    );
                }
                response.data.access_token
            }
        };

        let timestamp = self.timestamp();
        let url = self.endpoint(path)?;

        let payload = match body {
            Some(body) => Some(serde_json::to_vec(body).inspect_err(|err| {
                error!(url = %url, activity = "json marshal post data", error = %err, "failed to serialize request body");
            })?),
            None => None,
        };
        let encoded_body = payload.as_deref().map(encode_body).unwrap_or_default();

        let canonical = request_canonical(&timestamp, &access_token, path, &encoded_body);
        let signature = sign_canonical::<RequestError>(&self.identity().private_key_path, &canonical)
            .inspect_err(|err| {
                error!(url = %url, activity = "sign request", error = %err, "failed to sign request");
            })?;

        let request_id = Uuid::new_v4().to_string();
        let mut builder = self
            .http_client()
            .request(method, url.clone())
            .bearer_auth(&access_token)
            .header(HEADER_REQUEST_ID, &request_id)
            .header(HEADER_TIMESTAMP, &timestamp)
            .header(HEADER_SIGNATURE, &signature);

        if let Some(payload) = payload {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        self.dispatch(builder, &url, Some(&request_id), &timestamp).await
    }

    /// Send `builder` and decode the body into `T`
    ///
    /// The body is decoded whatever the HTTP status; an error envelope on a
    /// 4xx still reaches the caller as data. Undecodable bodies come back as
    /// [`DecodeError`] with the raw text attached.
    pub(crate) async fn dispatch<T, E>(
        &self,
        builder: RequestBuilder,
        url: &Url,
        request_id: Option<&str>,
        timestamp: &str,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: From<reqwest::Error> + From<DecodeError>,
    {
        let response = builder.send().await.inspect_err(|err| {
            error!(url = %url, request_id, error = %err, "request failed");
        })?;

        let status = response.status().as_u16();
        let raw = response.bytes().await.inspect_err(|err| {
            error!(url = %url, request_id, status, error = %err, "failed to read response body");
        })?;
        let body = String::from_utf8_lossy(&raw).into_owned();

        match serde_json::from_slice::<T>(&raw) {
            Ok(decoded) => {
                debug!(url = %url, request_id, timestamp, status, response = %body, "request completed");
                Ok(decoded)
            }
            Err(source) => {
                error!(url = %url, request_id, status, response = %body, error = %source, "failed to decode response");
                Err(DecodeError {
                    status,
                    body,
                    source,
                }
                .into())
            }
        }
    }
}

impl RequestScope<'_> {
    /// Signed GET; any query string is part of `path`
    pub(crate) async fn get<T>(self, path: &str) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        self.client
            .execute::<(), T>(Method::GET, path, None, self.access_token)
            .await
    }

    /// Signed POST with a JSON body
    pub(crate) async fn post<B, T>(self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .execute(Method::POST, path, Some(body), self.access_token)
            .await
    }
}
