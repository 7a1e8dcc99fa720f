// crates/palisade-node/src/config.rs
//
// Node configuration loaded from a TOML file.

use serde::{Deserialize, Serialize};

/// Top-level node configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Address the RPC server binds to.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port the RPC server binds to.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Milliseconds between automatically produced blocks.
    /// Zero disables the block producer; height then only moves
    /// through the `chain/advance` RPC method.
    #[serde(default = "default_block_interval_ms")]
    pub block_interval_ms: u64,

    /// Accounts seeded into the ledger at startup.
    #[serde(default)]
    pub genesis: Vec<GenesisAccount>,
}

/// A single account funded at genesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Hex-encoded 32-byte principal.
    pub principal: String,

    /// Initial $PALE balance.
    #[serde(default)]
    pub balance: u64,

    /// Initial reputation score.
    #[serde(default)]
    pub reputation: u64,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    7144
}

fn default_block_interval_ms() -> u64 {
    1_000
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            block_interval_ms: default_block_interval_ms(),
            genesis: Vec::new(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: NodeConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NodeConfig::default();
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.rpc_port, 7144);
        assert_eq!(config.block_interval_ms, 1_000);
        assert!(config.genesis.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: NodeConfig = toml::from_str("").unwrap();
        assert_eq!(config.rpc_port, 7144);
        assert!(config.genesis.is_empty());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
            rpc_host = "0.0.0.0"
            rpc_port = 8080
            block_interval_ms = 0

            [[genesis]]
            principal = "0101010101010101010101010101010101010101010101010101010101010101"
            balance = 50000
            reputation = 25

            [[genesis]]
            principal = "0202020202020202020202020202020202020202020202020202020202020202"
        "#;
        let config: NodeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rpc_host, "0.0.0.0");
        assert_eq!(config.rpc_port, 8080);
        assert_eq!(config.block_interval_ms, 0);
        assert_eq!(config.genesis.len(), 2);
        assert_eq!(config.genesis[0].balance, 50_000);
        assert_eq!(config.genesis[0].reputation, 25);
        assert_eq!(config.genesis[1].balance, 0);
        assert_eq!(config.genesis[1].reputation, 0);
    }
}
