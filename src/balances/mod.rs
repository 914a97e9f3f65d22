mod models;

pub use models::{BalanceReport, ReserveInfo, ReservePosition};

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::Provider,
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::utils::{
    contracts::{
        ATokenContract, AavePoolContract, Erc20Contract, StableDebtTokenContract,
        VariableDebtTokenContract,
    },
    math_helper,
};

/// Reads an account's net position in every reserve of one pool deployment.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Enumerates the pool's reserves and builds the symbol -> net balance
    /// report for the given account.
    ///
    /// All calls are sequential, in the order the pool returns its reserves.
    /// Any failed call or undecodable response aborts the whole aggregation;
    /// no partial report is returned.
    pub async fn aggregate<P: Provider<Ethereum>>(
        provider: &P,
        pool_address: Address,
        account: Address,
    ) -> Result<BalanceReport> {
        let pool = AavePoolContract::new(pool_address, provider);

        let reserves = pool
            .getReservesList()
            .call()
            .await
            .context("Failed to fetch the pool reserve list")?
            .reserves;
        debug!("Pool {} lists {} reserves", pool_address, reserves.len());

        let mut positions = Vec::with_capacity(reserves.len());
        for reserve in reserves {
            let reserve_info = Self::get_reserve_info(provider, reserve).await?;

            let reserve_data = pool
                .getReserveData(reserve)
                .call()
                .await
                .with_context(|| format!("Failed to fetch reserve data for {}", reserve))?
                .data;

            let deposit =
                Self::get_deposit(provider, reserve_data.aTokenAddress, account).await?;
            let total_debt = Self::get_borrow(
                provider,
                reserve_data.stableDebtTokenAddress,
                reserve_data.variableDebtTokenAddress,
                account,
            )
            .await?;

            debug!(
                "{}: deposit {} total debt {}",
                reserve_info.symbol, deposit, total_debt
            );

            positions.push(ReservePosition {
                symbol: reserve_info.symbol,
                decimals: reserve_info.decimals,
                deposit,
                total_debt,
            });
        }

        build_report(&positions)
    }

    /// Reads symbol and decimals from the reserve's own token contract.
    async fn get_reserve_info<P: Provider<Ethereum>>(
        provider: &P,
        token_address: Address,
    ) -> Result<ReserveInfo> {
        let erc20 = Erc20Contract::new(token_address, provider);

        let symbol = erc20
            .symbol()
            .call()
            .await
            .with_context(|| format!("Failed to read symbol() of {}", token_address))?
            .symbol;
        let decimals = erc20
            .decimals()
            .call()
            .await
            .with_context(|| format!("Failed to read decimals() of {}", token_address))?
            .decimals;

        Ok(ReserveInfo { symbol, decimals })
    }

    async fn get_deposit<P: Provider<Ethereum>>(
        provider: &P,
        a_token_address: Address,
        account: Address,
    ) -> Result<U256> {
        let a_token = ATokenContract::new(a_token_address, provider);

        let balance = a_token
            .balanceOf(account)
            .call()
            .await
            .with_context(|| format!("Failed to read aToken balance at {}", a_token_address))?
            .balance;

        Ok(balance)
    }

    /// Total debt is the sum of the stable-rate and variable-rate debt token
    /// balances; both are raw amounts of the same underlying asset.
    async fn get_borrow<P: Provider<Ethereum>>(
        provider: &P,
        stable_debt_token_address: Address,
        variable_debt_token_address: Address,
        account: Address,
    ) -> Result<U256> {
        let stable_debt_token = StableDebtTokenContract::new(stable_debt_token_address, provider);
        let variable_debt_token =
            VariableDebtTokenContract::new(variable_debt_token_address, provider);

        let stable_debt = stable_debt_token
            .balanceOf(account)
            .call()
            .await
            .with_context(|| {
                format!(
                    "Failed to read stable debt balance at {}",
                    stable_debt_token_address
                )
            })?
            .balance;
        let variable_debt = variable_debt_token
            .balanceOf(account)
            .call()
            .await
            .with_context(|| {
                format!(
                    "Failed to read variable debt balance at {}",
                    variable_debt_token_address
                )
            })?
            .balance;

        stable_debt
            .checked_add(variable_debt)
            .context("Total debt overflowed")
    }
}

/// Turns raw per-reserve positions into the normalized report.
///
/// Net = deposit - debt in the raw signed domain, then divided by
/// 10^decimals. A later position with the same symbol overwrites the
/// earlier entry.
pub fn build_report(positions: &[ReservePosition]) -> Result<BalanceReport> {
    let mut report = BalanceReport::new();

    for position in positions {
        let net = math_helper::net_position(position.deposit, position.total_debt)
            .with_context(|| format!("Failed to compute net position for {}", position.symbol))?;
        let normalized = math_helper::divide_by_precision_signed_f64(net, position.decimals)
            .with_context(|| format!("Failed to normalize net position for {}", position.symbol))?;
        report.insert(position.symbol.clone(), normalized);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::Bytes,
        providers::{mock::Asserter, ProviderBuilder},
        sol_types::SolCall,
    };

    use super::*;

    fn position(symbol: &str, decimals: u8, deposit: u128, total_debt: u128) -> ReservePosition {
        ReservePosition {
            symbol: symbol.to_string(),
            decimals,
            deposit: U256::from(deposit),
            total_debt: U256::from(total_debt),
        }
    }

    #[test]
    fn test_zero_reserves_yield_empty_report() {
        let report = build_report(&[]).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_has_one_entry_per_reserve() {
        let positions = vec![
            position("TKA", 18, 2_000_000_000_000_000_000, 0),
            position("TKB", 6, 5_000_000, 1_000_000),
        ];

        let report = build_report(&positions).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report["TKA"], 2.0);
        assert_eq!(report["TKB"], 4.0);
    }

    #[test]
    fn test_duplicate_symbol_overwrites_earlier_entry() {
        let positions = vec![position("DUP", 6, 1_000_000, 0), position("DUP", 6, 3_000_000, 0)];

        let report = build_report(&positions).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report["DUP"], 3.0);
    }

    #[tokio::test]
    async fn test_metadata_failure_aborts_whole_aggregation() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().on_mocked_client(asserter.clone());

        // Two reserves listed, then the first symbol() lookup reverts
        let reserves = (vec![Address::repeat_byte(0x11), Address::repeat_byte(0x22)],);
        asserter.push_success(&Bytes::from(
            AavePoolContract::getReservesListCall::abi_encode_returns(&reserves),
        ));
        asserter.push_failure_msg("execution reverted");

        let result = BalanceAggregator::aggregate(
            &provider,
            Address::repeat_byte(0xaa),
            Address::repeat_byte(0xbb),
        )
        .await;

        // No partial one-entry report, the whole network fails
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("symbol()"));
    }

    #[test]
    fn test_debt_above_deposit_stays_negative() {
        let positions = vec![position("USDC", 6, 100, 130)];

        let report = build_report(&positions).unwrap();

        assert_eq!(report["USDC"], -0.00003);
    }
}
