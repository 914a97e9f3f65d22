use aave_balances::{
    balances::{BalanceAggregator, BalanceReport},
    blockchain_manager::BlockchainManager,
    config::NETWORKS,
    utils,
};
use alloy::primitives::Address;
use anyhow::{Context, Result};
use tracing::info;

/// Main entry point for the cross-chain balance reporter
///
/// For each configured network, in declared order, this connects to the
/// network's RPC endpoint, aggregates the account's net position per reserve
/// and prints the report. A failure on one network aborts the remaining
/// iteration.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    init_pre_run()?;

    let args = std::env::args().collect::<Vec<String>>();
    let Some(account) = account_from_args(&args) else {
        println!("Usage: aave-balances ADDRESS");
        return Ok(());
    };

    let account: Address = account
        .parse()
        .context("The account argument is not a valid address")?;

    info!("Fetching net positions for {}", account);

    for network in &NETWORKS {
        let pool_address: Address = network
            .pool_address
            .parse()
            .with_context(|| format!("Invalid pool address for {}", network.name))?;

        let provider = BlockchainManager::get_provider(network.rpc_url)
            .with_context(|| format!("Failed to build a provider for {}", network.name))?;

        info!("Querying {} via {}", network.name, network.rpc_url);

        let report = BalanceAggregator::aggregate(&provider, pool_address, account)
            .await
            .with_context(|| format!("Aggregation failed on {}", network.name))?;

        println!("{} {}", network.name, format_report(&report));
    }

    Ok(())
}

/// Loads environment variables from an optional `.env` file and sets up the
/// logger.
fn init_pre_run() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::logger::setup_logger().context("Failed to setup logger")?;

    Ok(())
}

fn account_from_args(args: &[String]) -> Option<&str> {
    args.get(1).map(|arg| arg.as_str())
}

/// Renders a report with symbols sorted for stable output. Only the map
/// content is part of the contract, not the ordering.
fn format_report(report: &BalanceReport) -> String {
    let mut entries: Vec<_> = report.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let body = entries
        .iter()
        .map(|(symbol, balance)| format!("{}: {}", symbol, balance))
        .collect::<Vec<_>>()
        .join(", ");

    if body.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_account_argument() {
        let args = vec!["aave-balances".to_string()];
        assert!(account_from_args(&args).is_none());
    }

    #[test]
    fn test_account_argument_is_first_positional() {
        let args = vec![
            "aave-balances".to_string(),
            "0x2b112f430d725897a0b6f55a582fe122d21f4ef7".to_string(),
        ];
        assert_eq!(
            account_from_args(&args),
            Some("0x2b112f430d725897a0b6f55a582fe122d21f4ef7")
        );
    }

    #[test]
    fn test_format_report_sorts_symbols() {
        let mut report = BalanceReport::new();
        report.insert("USDC".to_string(), 4.0);
        report.insert("DAI".to_string(), -1.5);

        assert_eq!(format_report(&report), "{ DAI: -1.5, USDC: 4 }");
    }

    #[test]
    fn test_format_report_empty() {
        assert_eq!(format_report(&BalanceReport::new()), "{}");
    }
}
