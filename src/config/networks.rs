/// A single supported deployment target: one chain, one Aave v3 pool instance.
#[derive(Debug, Clone, Copy)]
pub struct NetworkConfig {
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub pool_address: &'static str,
}

/// Supported networks, processed in declaration order.
///
/// Aave v3 uses the same pool address on every chain it is deployed to.
pub const NETWORKS: [NetworkConfig; 6] = [
    NetworkConfig {
        name: "optimism",
        rpc_url: "https://mainnet.optimism.io",
        pool_address: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
    },
    NetworkConfig {
        name: "arbitrum",
        rpc_url: "https://arb1.arbitrum.io/rpc",
        pool_address: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
    },
    NetworkConfig {
        name: "polygon",
        rpc_url: "https://polygon-rpc.com/",
        pool_address: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
    },
    NetworkConfig {
        name: "fantom",
        rpc_url: "https://rpc.ftm.tools/",
        pool_address: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
    },
    NetworkConfig {
        name: "avalanche",
        rpc_url: "https://api.avax.network/ext/bc/C/rpc",
        pool_address: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
    },
    NetworkConfig {
        name: "harmony",
        rpc_url: "https://api.harmony.one",
        pool_address: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
    },
];
