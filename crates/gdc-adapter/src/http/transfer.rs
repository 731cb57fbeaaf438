/*
[INPUT]:  Fund transfer parameters and the signed request executor
[OUTPUT]: Fund transfer results
[POS]:    HTTP layer - transfer endpoints (require token + body signature)
[UPDATE]: When adding new transfer endpoints or changing the transfer body
*/

use crate::http::client::RequestScope;
use crate::http::{GdcClient, Result};
use crate::types::{ApiResponse, FundTransfer, FundTransferRequest, FundTransferResult};

pub const FUND_TRANSFER_PATH: &str = "/v1.0/transfer/fund-transfer/transfer";

impl RequestScope<'_> {
    /// Submit a fund transfer
    ///
    /// POST /v1.0/transfer/fund-transfer/transfer
    /// The amount is validated before any token is requested.
    pub async fn transfer_inquiry(
        self,
        transfer: FundTransfer,
    ) -> Result<ApiResponse<FundTransferResult>> {
        let request = FundTransferRequest::try_from(transfer)?;
        Ok(self.post(FUND_TRANSFER_PATH, &request).await?)
    }
}

impl GdcClient {
    /// Submit a fund transfer with a freshly acquired token
    pub async fn transfer_inquiry(
        &self,
        transfer: FundTransfer,
    ) -> Result<ApiResponse<FundTransferResult>> {
        self.unpinned().transfer_inquiry(transfer).await
    }
}
