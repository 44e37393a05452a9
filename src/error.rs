use crate::address::{Address, AddressError};
use crate::sale::SalePhase;
use thiserror::Error;

/// コレクション設定の検証で見つかった違反
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max_supply must be greater than zero")]
    ZeroMaxSupply,

    #[error("{}.max_mint_amount_per_tx must be greater than zero", .phase.field_name())]
    ZeroMintAmount { phase: SalePhase },

    #[error(
        "{}.max_mint_amount_per_tx ({amount}) exceeds max_supply ({max_supply})",
        .phase.field_name()
    )]
    MintAmountExceedsSupply {
        phase: SalePhase,
        amount: u32,
        max_supply: u64,
    },

    #[error("contract_address is invalid: {0}")]
    InvalidContractAddress(AddressError),

    #[error("whitelist entry #{index} is invalid: {source}")]
    InvalidWhitelistAddress { index: usize, source: AddressError },

    #[error("whitelist entry #{index} duplicates entry #{first_index}: {address}")]
    DuplicateWhitelistAddress {
        index: usize,
        first_index: usize,
        address: Address,
    },

    #[error("contract_name must be PascalCase letters and digits: {0:?}")]
    InvalidContractName(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("hidden_metadata_uri must look like scheme://path: {0:?}")]
    InvalidHiddenMetadataUri(String),
}
