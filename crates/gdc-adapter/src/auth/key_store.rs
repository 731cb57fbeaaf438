/*
[INPUT]:  Filesystem path of a PEM-encoded private key
[OUTPUT]: Parsed RSA private key ready for signing
[POS]:    Auth layer - key material loading (PKCS#1 with PKCS#8 fallback)
[UPDATE]: When supporting additional key containers or key types
*/

use std::fs;
use std::path::Path;

use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::PrivateKeyInfo;

use crate::http::KeyError;

/// Read and parse the RSA private key stored at `path`
///
/// The file is read on every call; nothing is cached, so a key that
/// disappears between two calls fails the second one with
/// [`KeyError::Unreadable`].
pub fn load_private_key(path: impl AsRef<Path>) -> Result<RsaPrivateKey, KeyError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| KeyError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let block = pem::parse(&bytes)
        .map_err(|e| KeyError::Malformed(format!("invalid private key format: {e}")))?;

    parse_private_key_der(block.contents())
}

/// Parse DER bytes as PKCS#1 first, then as an RSA key wrapped in PKCS#8
pub fn parse_private_key_der(der: &[u8]) -> Result<RsaPrivateKey, KeyError> {
    let pkcs1_err = match RsaPrivateKey::from_pkcs1_der(der) {
        Ok(key) => return Ok(key),
        Err(err) => err,
    };

    let info = PrivateKeyInfo::try_from(der).map_err(|pkcs8_err| {
        KeyError::Malformed(format!("PKCS#1: {pkcs1_err}\nPKCS#8: {pkcs8_err}"))
    })?;

    if info.algorithm.oid != rsa::pkcs1::ALGORITHM_OID {
        return Err(KeyError::UnsupportedKeyType(algorithm_name(
            &info.algorithm.oid.to_string(),
        )));
    }

    RsaPrivateKey::try_from(info).map_err(|pkcs8_err| {
        KeyError::Malformed(format!("PKCS#1: {pkcs1_err}\nPKCS#8: {pkcs8_err}"))
    })
}

fn algorithm_name(oid: &str) -> String {
    match oid {
        "1.2.840.10045.2.1" => format!("EC ({oid})"),
        "1.3.101.112" => format!("Ed25519 ({oid})"),
        "1.3.101.110" => format!("X25519 ({oid})"),
        "1.2.840.10040.4.1" => format!("DSA ({oid})"),
        _ => oid.to_string(),
    }
}
