use serde::{Deserialize, Serialize};
use std::fmt;

/// ブロックエクスプローラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockExplorer {
    pub name: &'static str,
    /// ローカルネットワークなどエクスプローラーが無い場合は `None`
    pub base_url: Option<&'static str>,
}

impl BlockExplorer {
    pub fn contract_url(&self, address: &str) -> String {
        self.base_url
            .map(|base| format!("{}/address/{}", base, address))
            .unwrap_or_default()
    }

    pub fn transaction_url(&self, tx_hash: &str) -> String {
        self.base_url
            .map(|base| format!("{}/tx/{}", base, tx_hash))
            .unwrap_or_default()
    }
}

/// デプロイ先ネットワークのパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub symbol: &'static str,
    pub block_explorer: BlockExplorer,
}

pub const HARDHAT_LOCAL: NetworkConfig = NetworkConfig {
    chain_id: 31337,
    symbol: "ETH (test)",
    block_explorer: BlockExplorer {
        name: "Block explorer (not available for local chains)",
        base_url: None,
    },
};

pub const ETHEREUM_TESTNET: NetworkConfig = NetworkConfig {
    chain_id: 11155111,
    symbol: "ETH (test)",
    block_explorer: BlockExplorer {
        name: "Etherscan (Sepolia)",
        base_url: Some("https://sepolia.etherscan.io"),
    },
};

pub const ETHEREUM_MAINNET: NetworkConfig = NetworkConfig {
    chain_id: 1,
    symbol: "ETH",
    block_explorer: BlockExplorer {
        name: "Etherscan",
        base_url: Some("https://etherscan.io"),
    },
};

pub const POLYGON_TESTNET: NetworkConfig = NetworkConfig {
    chain_id: 80002,
    symbol: "MATIC (test)",
    block_explorer: BlockExplorer {
        name: "Polygonscan (Amoy)",
        base_url: Some("https://amoy.polygonscan.com"),
    },
};

pub const POLYGON_MAINNET: NetworkConfig = NetworkConfig {
    chain_id: 137,
    symbol: "MATIC",
    block_explorer: BlockExplorer {
        name: "Polygonscan",
        base_url: Some("https://polygonscan.com"),
    },
};

/// 設定ファイルから参照できるネットワーク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkPreset {
    HardhatLocal,
    EthereumTestnet,
    EthereumMainnet,
    PolygonTestnet,
    PolygonMainnet,
}

impl NetworkPreset {
    pub fn config(self) -> &'static NetworkConfig {
        match self {
            NetworkPreset::HardhatLocal => &HARDHAT_LOCAL,
            NetworkPreset::EthereumTestnet => &ETHEREUM_TESTNET,
            NetworkPreset::EthereumMainnet => &ETHEREUM_MAINNET,
            NetworkPreset::PolygonTestnet => &POLYGON_TESTNET,
            NetworkPreset::PolygonMainnet => &POLYGON_MAINNET,
        }
    }
}

impl fmt::Display for NetworkPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkPreset::HardhatLocal => write!(f, "hardhat_local"),
            NetworkPreset::EthereumTestnet => write!(f, "ethereum_testnet"),
            NetworkPreset::EthereumMainnet => write!(f, "ethereum_mainnet"),
            NetworkPreset::PolygonTestnet => write!(f, "polygon_testnet"),
            NetworkPreset::PolygonMainnet => write!(f, "polygon_mainnet"),
        }
    }
}
