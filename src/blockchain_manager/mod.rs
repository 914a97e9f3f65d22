use alloy::{
    network::Ethereum,
    providers::{Provider, ProviderBuilder},
    rpc::client::RpcClient,
    transports::{http::reqwest::Url, layers::RetryBackoffLayer},
};
use anyhow::Result;

/// BlockchainManager handles blockchain-related operations and connections.
pub struct BlockchainManager;

impl BlockchainManager {
    /// Creates an HTTP provider instance for one network's RPC endpoint.
    ///
    /// # Arguments
    /// * `rpc_url` - The network's RPC endpoint URL
    ///
    /// # Returns
    /// * `Result<impl Provider<Ethereum>>` - A Result containing either the provider instance or an error
    pub fn get_provider(rpc_url: &str) -> Result<impl Provider<Ethereum>> {
        // Instantiate the RetryBackoffLayer with the configuration
        let retry_layer = RetryBackoffLayer::new(10, 1000, 10000);

        let client = RpcClient::builder()
            .layer(retry_layer)
            .http(Url::parse(rpc_url)?);

        let provider = ProviderBuilder::new().on_client(client);

        Ok(provider)
    }
}
