/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs carrying the optional error envelope
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::models::Amount;
use crate::http::{GdcError, Result};

/// Deserialize JSON `null` as `T::default()`; pair with `#[serde(default)]`
/// so a missing key behaves the same way
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Business-level error fields that may appear on any response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    #[serde(rename = "responseCode", default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(rename = "responseMessage", default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
}

impl ApiErrorEnvelope {
    /// True when the body carries a non-empty `responseCode`
    pub fn is_error(&self) -> bool {
        self.response_code
            .as_deref()
            .is_some_and(|code| !code.is_empty())
    }
}

/// Decoded response: typed payload plus whatever envelope came with it
///
/// The envelope is never interpreted by the client; HTTP success with an
/// error envelope is still an `Ok` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(flatten)]
    pub error: ApiErrorEnvelope,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn is_error(&self) -> bool {
        self.error.is_error()
    }

    /// Return the payload, or [`GdcError::Api`] if the envelope reports an error
    pub fn into_data(self) -> Result<T> {
        if self.error.is_error() {
            return Err(GdcError::api_error(
                self.error.response_code.unwrap_or_default(),
                self.error.response_message.unwrap_or_default(),
            ));
        }
        Ok(self.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceInquiry {
    #[serde(rename = "activeBalance", default, deserialize_with = "null_default")]
    pub active_balance: Decimal,
    #[serde(rename = "depositBalance", default, deserialize_with = "null_default")]
    pub deposit_balance: Decimal,
    #[serde(rename = "floatingDebt", default, deserialize_with = "null_default")]
    pub floating_debt: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNameInquiry {
    #[serde(rename = "accountName", default, deserialize_with = "null_default")]
    pub account_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundTransferResult {
    #[serde(default, deserialize_with = "null_default")]
    pub amount: Amount,
    #[serde(rename = "bankReff", default, deserialize_with = "null_default")]
    pub bank_reff: String,
    #[serde(rename = "partnerReff", default, deserialize_with = "null_default")]
    pub partner_reff: String,
    #[serde(rename = "trxReff", default, deserialize_with = "null_default")]
    pub trx_reff: String,
    #[serde(rename = "transferMethod", default, deserialize_with = "null_default")]
    pub transfer_method: String,
}
