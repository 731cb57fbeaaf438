/*
[INPUT]:  Client identity and GDC API endpoints
[OUTPUT]: Signed HTTP calls and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod executor;
pub mod signature;
pub mod transfer;

pub use error::{AuthError, DecodeError, GdcError, KeyError, RequestError, Result, SignError};

pub use client::{ClientConfig, ClientIdentity, DEFAULT_TIMEZONE, GdcClient, RequestScope};
