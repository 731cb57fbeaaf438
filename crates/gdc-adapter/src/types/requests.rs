/*
[INPUT]:  Business parameters from the operations layer
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::enums::TransferType;
use super::models::Amount;
use crate::http::{GdcError, Result};

pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenRequest {
    #[serde(rename = "grantType")]
    pub grant_type: String,
}

impl Default for AccessTokenRequest {
    fn default() -> Self {
        Self {
            grant_type: GRANT_TYPE_CLIENT_CREDENTIALS.to_string(),
        }
    }
}

/// Fund transfer parameters as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundTransfer {
    pub currency: String,
    /// Decimal amount, e.g. "15000" or "15000.5"
    pub amount: String,
    pub bank_code: String,
    pub account_number: String,
    pub account_name: String,
    /// Partner-side transaction id
    pub partner_reff: String,
    pub remark: String,
    pub transfer_type: Option<TransferType>,
}

// Field order is the serialized key order, kept lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundTransferRequest {
    pub amount: Amount,
    #[serde(rename = "destAccountName")]
    pub dest_account_name: String,
    #[serde(rename = "destAccountNo")]
    pub dest_account_no: String,
    #[serde(rename = "destBankCode")]
    pub dest_bank_code: String,
    #[serde(rename = "partnerReff")]
    pub partner_reff: String,
    pub remark: String,
    #[serde(rename = "transferType", skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<TransferType>,
}

impl TryFrom<FundTransfer> for FundTransferRequest {
    type Error = GdcError;

    fn try_from(transfer: FundTransfer) -> Result<Self> {
        Ok(Self {
            amount: Amount {
                currency: transfer.currency.to_uppercase(),
                value: format_amount(&transfer.amount)?,
            },
            dest_account_name: transfer.account_name.to_uppercase(),
            dest_account_no: transfer.account_number,
            dest_bank_code: transfer.bank_code,
            partner_reff: transfer.partner_reff,
            remark: transfer.remark,
            transfer_type: transfer.transfer_type,
        })
    }
}

/// Render a decimal amount with exactly two fractional digits
pub fn format_amount(amount: &str) -> Result<String> {
    let trimmed = amount.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| GdcError::InvalidAmount {
            value: amount.to_string(),
            reason: e.to_string(),
        })?;

    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    Ok(rounded.to_string())
}
