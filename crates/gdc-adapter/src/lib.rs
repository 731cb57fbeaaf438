/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public GDC disbursement adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod http;
pub mod logging;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AccessToken, load_private_key, sign, verify};

// Re-export commonly used types from http
pub use http::{
    AuthError,
    ClientConfig,
    ClientIdentity,
    DecodeError,
    GdcClient,
    GdcError,
    KeyError,
    RequestError,
    RequestScope,
    Result,
    SignError,
};

pub use config::{GdcConfig, LogConfig, LogLevel, LogRotation};
pub use logging::init_file_logging;

// Re-export all types
pub use types::*;
