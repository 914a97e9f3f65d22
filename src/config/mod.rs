mod networks;

pub use networks::{NetworkConfig, NETWORKS};
