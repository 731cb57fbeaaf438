/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: One signed GDC API call printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gdc_adapter::logging::WorkerGuard;
use gdc_adapter::{FundTransfer, GdcClient, GdcConfig, TransferType, init_file_logging};

#[derive(Parser, Debug)]
#[command(name = "gdc", version, about = "GDC disbursement API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request an access token
    Token,
    /// Query partner balance
    Balance,
    /// Look up the beneficiary name of an account
    AccountInquiry {
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        account_number: String,
    },
    /// Submit a fund transfer
    Transfer {
        #[arg(long)]
        currency: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        account_number: String,
        #[arg(long)]
        account_name: String,
        #[arg(long)]
        partner_reff: String,
        #[arg(long, default_value = "")]
        remark: String,
        #[arg(long, value_parser = parse_transfer_type)]
        transfer_type: Option<TransferType>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = GdcConfig::from_file(&args.config_path)
        .with_context(|| format!("load config {}", args.config_path.display()))?;
    let _log_guard = init_logging(&config, &args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        base_url = %config.base_url,
        "starting gdc client"
    );

    let client = GdcClient::new(config.identity()).context("build client")?;
    run(&client, args.command).await
}

async fn run(client: &GdcClient, command: Command) -> Result<()> {
    match command {
        Command::Token => {
            let response = client
                .get_access_token()
                .await
                .context("acquire access token")?;
            print_json(&response)
        }
        Command::Balance => {
            let response = client.balance_inquiry().await.context("balance inquiry")?;
            print_json(&response)
        }
        Command::AccountInquiry {
            bank_code,
            account_number,
        } => {
            let response = client
                .bank_account_name_inquiry(&bank_code, &account_number)
                .await
                .context("account name inquiry")?;
            print_json(&response)
        }
        Command::Transfer {
            currency,
            amount,
            bank_code,
            account_number,
            account_name,
            partner_reff,
            remark,
            transfer_type,
        } => {
            let transfer = FundTransfer {
                currency,
                amount,
                bank_code,
                account_number,
                account_name,
                partner_reff,
                remark,
                transfer_type,
            };
            let response = client
                .transfer_inquiry(transfer)
                .await
                .context("fund transfer")?;
            print_json(&response)
        }
    }
}

fn init_logging(config: &GdcConfig, log_level: &str) -> Result<Option<WorkerGuard>> {
    if let Some(log) = config.log.as_ref().filter(|log| log.enable) {
        return init_file_logging(log).context("initialize file logging");
    }

    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(None)
}

fn parse_transfer_type(value: &str) -> Result<TransferType, String> {
    value.parse()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("encode response")?;
    println!("{json}");
    Ok(())
}
