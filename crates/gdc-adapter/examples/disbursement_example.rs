/*
[INPUT]:  GDC sandbox credentials from environment variables
[OUTPUT]: Balance, name inquiry, and transfer results on stdout
[POS]:    Examples - end-to-end disbursement flow demonstration
[UPDATE]: When operations or token pinning change
*/

use gdc_adapter::*;

/// Example: disbursement flow
///
/// 1. Build the client from GDC_BASE_URL, GDC_CLIENT_KEY, GDC_PRIVATE_KEY
/// 2. Acquire one token and pin it for the balance inquiry
/// 3. Look up the beneficiary (fresh token)
/// 4. Transfer only if the envelope reports no error
#[tokio::main]
async fn main() {
    println!("=== GDC Disbursement Example ===\n");

    let (Ok(base_url), Ok(client_key), Ok(private_key)) = (
        std::env::var("GDC_BASE_URL"),
        std::env::var("GDC_CLIENT_KEY"),
        std::env::var("GDC_PRIVATE_KEY"),
    ) else {
        eprintln!("Set GDC_BASE_URL, GDC_CLIENT_KEY and GDC_PRIVATE_KEY");
        return;
    };

    let client = match GdcClient::new(ClientIdentity::new(base_url, client_key, private_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created");

    let token = match client.get_access_token().await {
        Ok(response) if !response.is_error() => response.data.access_token,
        Ok(response) => {
            eprintln!("Token rejected: {:?}", response.error);
            return;
        }
        Err(e) => {
            eprintln!("Token request failed: {}", e);
            return;
        }
    };
    println!("✓ Access token acquired");

    match client.with_access_token(token).balance_inquiry().await {
        Ok(balance) => println!("  Balance: {:?}", balance.data),
        Err(e) => eprintln!("Balance inquiry failed: {}", e),
    }

    let inquiry = match client.bank_account_name_inquiry("014", "1234567890").await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Name inquiry failed: {}", e);
            return;
        }
    };
    let account_name = match inquiry.into_data() {
        Ok(data) => data.account_name,
        Err(e) => {
            eprintln!("Name inquiry rejected: {}", e);
            return;
        }
    };
    println!("✓ Beneficiary: {}", account_name);

    let transfer = FundTransfer {
        currency: "IDR".to_string(),
        amount: "10000".to_string(),
        bank_code: "014".to_string(),
        account_number: "1234567890".to_string(),
        account_name,
        partner_reff: format!("EXAMPLE-{}", uuid::Uuid::new_v4()),
        remark: "example payout".to_string(),
        transfer_type: Some(TransferType::Bifast),
    };
    match client.transfer_inquiry(transfer).await {
        Ok(response) => println!("✓ Transfer response: {:?}", response),
        Err(e) => eprintln!("Transfer failed: {}", e),
    }
}
