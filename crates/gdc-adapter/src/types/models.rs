/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs shared by requests, responses, and callbacks
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::responses::null_default;

/// Monetary amount as sent on the wire (`value` is a fixed two-decimal string)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(default, deserialize_with = "null_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "accountName", default, deserialize_with = "null_default")]
    pub account_name: String,
    #[serde(rename = "accountNo", default, deserialize_with = "null_default")]
    pub account_no: String,
    #[serde(rename = "bankCode", default, deserialize_with = "null_default")]
    pub bank_code: String,
}

/// Transfer status notification pushed by the bank to the partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCallback {
    pub timestamp: String,
    #[serde(rename = "transferType")]
    pub transfer_type: String,
    #[serde(alias = "Destination")]
    pub destination: Destination,
    #[serde(alias = "Amount")]
    pub amount: Amount,
    #[serde(rename = "partnerReff")]
    pub partner_reff: String,
    #[serde(rename = "trxReff")]
    pub trx_reff: String,
    #[serde(rename = "bankReff")]
    pub bank_reff: String,
}

impl TransferCallback {
    /// Parse a raw callback request body
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}
