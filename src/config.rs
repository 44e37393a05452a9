use crate::address::{Address, AddressError};
use crate::error::ValidationError;
use crate::marketplace::{MarketplaceConfig, MarketplacePreset};
use crate::network::{NetworkConfig, NetworkPreset};
use crate::sale::{Price, SaleConfig, SalePhase};
use crate::whitelist::Whitelist;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// バイナリが引数なしで読む設定ファイル
pub const DEFAULT_CONFIG_PATH: &str = "collection.yaml";

/// `whitelist_file` もインラインのリストも無いときに探すファイル
pub const DEFAULT_WHITELIST_FILE: &str = "whitelist.json";

/// IPFS の CID が入る位置を示すプレースホルダ
pub const CID_PLACEHOLDER: &str = "__CID__";

/// デプロイ対象の環境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Testnet,
    Mainnet,
}

impl Target {
    pub fn is_mainnet(self) -> bool {
        self == Target::Mainnet
    }
}

impl CollectionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read collection config: {:?}", path))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_yaml_str(&text, base_dir)
            .with_context(|| format!("invalid collection config: {:?}", path))
    }

    /// `whitelist_file` は `base_dir` からの相対パスとして解決する
    pub fn from_yaml_str(text: &str, base_dir: &Path) -> Result<Self> {
        let mut config: CollectionConfig = serde_yaml::from_str(text)?;

        match &config.whitelist_file {
            Some(file) => {
                if !config.whitelist_addresses.is_empty() {
                    bail!("whitelist_file and inline whitelist_addresses cannot both be set");
                }
                let whitelist = Whitelist::load(base_dir.join(file))?;
                config.whitelist_addresses = whitelist.into_entries();
            }
            None if config.whitelist_addresses.is_empty() => {
                let default_path = base_dir.join(DEFAULT_WHITELIST_FILE);
                if default_path.is_file() {
                    let whitelist = Whitelist::load(&default_path)?;
                    config.whitelist_addresses = whitelist.into_entries();
                } else {
                    tracing::debug!(path = ?default_path, "no whitelist file, whitelist is empty");
                }
            }
            None => {}
        }

        tracing::debug!(
            contract = %config.contract_name,
            whitelist = config.whitelist_addresses.len(),
            "collection config loaded"
        );
        Ok(config)
    }

    pub fn sale(&self, phase: SalePhase) -> &SaleConfig {
        match phase {
            SalePhase::Whitelist => &self.whitelist_sale,
            SalePhase::PreSale => &self.pre_sale,
            SalePhase::PublicSale => &self.public_sale,
        }
    }

    pub fn network(&self, target: Target) -> &'static NetworkConfig {
        match target {
            Target::Testnet => self.testnet.config(),
            Target::Mainnet => self.mainnet.config(),
        }
    }

    pub fn marketplace(&self) -> &'static MarketplaceConfig {
        self.marketplace_config.config()
    }

    /// 未デプロイなら `Ok(None)`
    pub fn contract_address(&self) -> Result<Option<Address>, AddressError> {
        self.contract_address.as_deref().map(str::parse::<Address>).transpose()
    }

    pub fn whitelist(&self) -> Whitelist {
        Whitelist::new(self.whitelist_addresses.clone())
    }

    pub fn has_metadata_placeholder(&self) -> bool {
        self.hidden_metadata_uri.contains(CID_PLACEHOLDER)
    }

    pub fn hidden_metadata_uri_for(&self, cid: &str) -> String {
        self.hidden_metadata_uri.replace(CID_PLACEHOLDER, cid)
    }

    /// コントラクトのエクスプローラー URL。未デプロイかエクスプローラーが無ければ `None`
    pub fn contract_explorer_url(&self, target: Target) -> Option<String> {
        let address = self.contract_address().ok().flatten()?;
        let url = self
            .network(target)
            .block_explorer
            .contract_url(&address.to_string());
        (!url.is_empty()).then_some(url)
    }

    pub fn marketplace_url(&self, target: Target) -> String {
        self.marketplace()
            .collection_url(&self.marketplace_identifier, target.is_mainnet())
    }

    /// すべての違反を列挙する（空なら妥当）
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("token_name", &self.token_name),
            ("token_symbol", &self.token_symbol),
            ("marketplace_identifier", &self.marketplace_identifier),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyField(field));
            }
        }

        if !is_pascal_case_identifier(&self.contract_name) {
            errors.push(ValidationError::InvalidContractName(self.contract_name.clone()));
        }

        if !has_uri_scheme(&self.hidden_metadata_uri) {
            errors.push(ValidationError::InvalidHiddenMetadataUri(
                self.hidden_metadata_uri.clone(),
            ));
        }

        if self.max_supply == 0 {
            errors.push(ValidationError::ZeroMaxSupply);
        }

        for phase in SalePhase::ALL {
            let amount = self.sale(phase).max_mint_amount_per_tx;
            if amount == 0 {
                errors.push(ValidationError::ZeroMintAmount { phase });
            } else if self.max_supply > 0 && u64::from(amount) > self.max_supply {
                errors.push(ValidationError::MintAmountExceedsSupply {
                    phase,
                    amount,
                    max_supply: self.max_supply,
                });
            }
        }

        if let Err(e) = self.contract_address() {
            errors.push(ValidationError::InvalidContractAddress(e));
        }

        errors.extend(self.whitelist().check());

        errors
    }
}

/// `^[A-Z][A-Za-z0-9]+$`
fn is_pascal_case_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && name.len() > 1
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn has_uri_scheme(uri: &str) -> bool {
    let Some((scheme, rest)) = uri.split_once("://") else { return false; };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub testnet: NetworkPreset,
    pub mainnet: NetworkPreset,
    pub contract_name: String,
    pub token_name: String,
    pub token_symbol: String,
    pub hidden_metadata_uri: String,
    pub max_supply: u64,
    pub whitelist_sale: SaleConfig,
    pub pre_sale: SaleConfig,
    pub public_sale: SaleConfig,
    #[serde(default)]
    pub contract_address: Option<String>,
    pub marketplace_identifier: String,
    pub marketplace_config: MarketplacePreset,
    /// 書き出し時は解決済みの `whitelist_addresses` だけを残す
    #[serde(default, skip_serializing)]
    pub whitelist_file: Option<PathBuf>,
    #[serde(default)]
    pub whitelist_addresses: Vec<String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        CollectionConfig {
            testnet: NetworkPreset::EthereumTestnet,
            mainnet: NetworkPreset::EthereumMainnet,
            contract_name: "ErcTest".to_string(),
            token_name: "My NFT Token".to_string(),
            token_symbol: "MNT".to_string(),
            hidden_metadata_uri: format!("ipfs://{}/hidden.json", CID_PLACEHOLDER),
            max_supply: 10000,
            whitelist_sale: SaleConfig {
                price: Price::from_wei(1_000_000_000_000_000),
                max_mint_amount_per_tx: 5,
            },
            pre_sale: SaleConfig {
                price: Price::from_wei(1_000_000_000_000_000),
                max_mint_amount_per_tx: 2,
            },
            public_sale: SaleConfig {
                price: Price::from_wei(50_000_000_000_000_000),
                max_mint_amount_per_tx: 5,
            },
            contract_address: Some("0xa9bccB99b47FC11b13941aF238DA917AF8E461A0".to_string()),
            marketplace_identifier: "my-nft-token".to_string(),
            marketplace_config: MarketplacePreset::OpenSea,
            whitelist_file: None,
            whitelist_addresses: Vec::new(),
        }
    }
}
