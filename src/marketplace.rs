use serde::{Deserialize, Serialize};

/// マーケットプレイスのパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketplaceConfig {
    pub name: &'static str,
    pub mainnet_base: &'static str,
    pub testnet_base: &'static str,
}

impl MarketplaceConfig {
    pub fn collection_url(&self, identifier: &str, is_mainnet: bool) -> String {
        let base = if is_mainnet { self.mainnet_base } else { self.testnet_base };
        format!("{}/collection/{}", base, identifier)
    }
}

pub const OPEN_SEA: MarketplaceConfig = MarketplaceConfig {
    name: "OpenSea",
    mainnet_base: "https://opensea.io",
    testnet_base: "https://testnets.opensea.io",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketplacePreset {
    OpenSea,
}

impl MarketplacePreset {
    pub fn config(self) -> &'static MarketplaceConfig {
        match self {
            MarketplacePreset::OpenSea => &OPEN_SEA,
        }
    }
}
