/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Transfer rail requested for a fund transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferType {
    Intrabank,
    Bifast,
    Online,
}

impl TransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::Intrabank => "INTRABANK",
            TransferType::Bifast => "BIFAST",
            TransferType::Online => "ONLINE",
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INTRABANK" => Ok(TransferType::Intrabank),
            "BIFAST" => Ok(TransferType::Bifast),
            "ONLINE" => Ok(TransferType::Online),
            other => Err(format!("unknown transfer type: {other}")),
        }
    }
}
