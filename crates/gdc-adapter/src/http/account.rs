/*
[INPUT]:  Bank code / account number and the signed request executor
[OUTPUT]: Balance and beneficiary name inquiry results
[POS]:    HTTP layer - account endpoints (require token + signature)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use url::form_urlencoded;

use crate::http::client::RequestScope;
use crate::http::{GdcClient, Result};
use crate::types::{AccountNameInquiry, ApiResponse, BalanceInquiry};

pub const BALANCE_INQUIRY_PATH: &str = "/v1.0/account/balance-inquiry";
pub const ACCOUNT_INQUIRY_PATH: &str = "/v1.0/transfer/account-inquiry";

impl RequestScope<'_> {
    /// Query partner balance
    ///
    /// GET /v1.0/account/balance-inquiry
    pub async fn balance_inquiry(self) -> Result<ApiResponse<BalanceInquiry>> {
        Ok(self.get(BALANCE_INQUIRY_PATH).await?)
    }

    /// Look up the beneficiary name of a bank account
    ///
    /// GET /v1.0/transfer/account-inquiry?bankCode={bank_code}&accountNumber={account_number}
    pub async fn bank_account_name_inquiry(
        self,
        bank_code: &str,
        account_number: &str,
    ) -> Result<ApiResponse<AccountNameInquiry>> {
        let endpoint = account_inquiry_endpoint(bank_code, account_number);
        Ok(self.get(&endpoint).await?)
    }
}

impl GdcClient {
    /// Query partner balance with a freshly acquired token
    pub async fn balance_inquiry(&self) -> Result<ApiResponse<BalanceInquiry>> {
        self.unpinned().balance_inquiry().await
    }

    /// Look up a beneficiary name with a freshly acquired token
    pub async fn bank_account_name_inquiry(
        &self,
        bank_code: &str,
        account_number: &str,
    ) -> Result<ApiResponse<AccountNameInquiry>> {
        self.unpinned()
            .bank_account_name_inquiry(bank_code, account_number)
            .await
    }
}

fn account_inquiry_endpoint(bank_code: &str, account_number: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("bankCode", bank_code)
        .append_pair("accountNumber", account_number)
        .finish();
    format!("{ACCOUNT_INQUIRY_PATH}?{query}")
}
