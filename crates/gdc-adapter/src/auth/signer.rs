/*
[INPUT]:  Canonical message string and RSA private key
[OUTPUT]: Base64-encoded RSA PKCS#1 v1.5 SHA-256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or signature encoding
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand::rngs::OsRng;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::http::SignError;

/// Sign `message` with RSASSA-PKCS1-v1_5 over its SHA-256 digest
///
/// Returns the raw signature as padded standard base64.
pub fn sign(key: &RsaPrivateKey, message: &str) -> Result<String, SignError> {
    let digest = Sha256::digest(message.as_bytes());
    let signature = key
        .sign_with_rng(&mut OsRng, Pkcs1v15Sign::new::<Sha256>(), &digest)
        .map_err(|err| match err {
            rsa::Error::InputNotHashed => SignError::DigestFailure(err.to_string()),
            other => SignError::SignatureFailure(other),
        })?;

    Ok(BASE64.encode(signature))
}

/// Verify a base64 signature produced by [`sign`]
pub fn verify(key: &RsaPublicKey, message: &str, signature_b64: &str) -> bool {
    let Ok(signature) = BASE64.decode(signature_b64) else {
        return false;
    };
    let digest = Sha256::digest(message.as_bytes());
    key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
        .is_ok()
}
