use std::collections::HashMap;

use alloy::primitives::U256;

/// Per-network result: asset symbol to normalized net balance.
///
/// Symbols are assumed unique within one pool's reserve list; a duplicate
/// symbol overwrites the earlier entry.
pub type BalanceReport = HashMap<String, f64>;

/// Display metadata of a reserve, read from its own token contract.
#[derive(Debug, Clone)]
pub struct ReserveInfo {
    pub symbol: String,
    pub decimals: u8,
}

/// Raw account position in one reserve, before normalization.
#[derive(Debug, Clone)]
pub struct ReservePosition {
    pub symbol: String,
    pub decimals: u8,
    pub deposit: U256,
    pub total_debt: U256,
}
