/*
[INPUT]:  Client identity and private key path
[OUTPUT]: Loaded keys, signatures, and access tokens
[POS]:    Auth layer - handles GDC client-credentials authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod key_store;
pub mod signer;
pub mod token;

pub use key_store::{load_private_key, parse_private_key_der};
pub use signer::{sign, verify};
pub use token::AccessToken;
