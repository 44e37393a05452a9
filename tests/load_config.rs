// 設定ファイル読み込みの結合テスト

use nft_collection_config::address::AddressError;
use nft_collection_config::{CollectionConfig, SalePhase, Target, ValidationError};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_with_whitelist_file() {
    let cfg = CollectionConfig::load(fixture("collection.yaml")).unwrap();

    assert_eq!(cfg.contract_name, "FixtureDrop");
    assert_eq!(cfg.max_supply, 500);
    assert_eq!(cfg.whitelist_addresses.len(), 2);
    assert_eq!(cfg.contract_address, None);
    assert!(cfg.validate().is_empty());
    assert!(!cfg.has_metadata_placeholder());
}

#[test]
fn test_prices_from_numbers_and_strings() {
    let cfg = CollectionConfig::load(fixture("collection.yaml")).unwrap();

    assert!(cfg.sale(SalePhase::Whitelist).price.is_free());
    assert_eq!(cfg.sale(SalePhase::PreSale).price.to_string(), "0.25");
    assert_eq!(cfg.sale(SalePhase::PublicSale).price.to_string(), "0.5");
    assert_eq!(
        cfg.sale(SalePhase::PublicSale).price.total_for(10).unwrap().to_string(),
        "5"
    );
}

#[test]
fn test_networks_and_marketplace() {
    let cfg = CollectionConfig::load(fixture("collection.yaml")).unwrap();

    assert_eq!(cfg.network(Target::Testnet).chain_id, 80002);
    assert_eq!(cfg.network(Target::Mainnet).chain_id, 137);
    assert_eq!(
        cfg.marketplace_url(Target::Mainnet),
        "https://opensea.io/collection/fixture-drop"
    );
    assert_eq!(cfg.contract_explorer_url(Target::Mainnet), None);
}

#[test]
fn test_whitelist_lookup() {
    let cfg = CollectionConfig::load(fixture("collection.yaml")).unwrap();
    let whitelist = cfg.whitelist();

    let member = "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc".parse().unwrap();
    let outsider = "0x90F79bf6EB2c4f870365E785982E1f101E93b906".parse().unwrap();
    assert!(whitelist.contains(&member));
    assert!(!whitelist.contains(&outsider));
}

#[test]
fn test_broken_fixture_reports_all_violations() {
    let cfg = CollectionConfig::load(fixture("broken/collection.yaml")).unwrap();
    let errors = cfg.validate();

    assert!(errors.contains(&ValidationError::EmptyField("token_symbol")));
    assert!(errors.contains(&ValidationError::InvalidContractName("broken_name".to_string())));
    assert!(errors.contains(&ValidationError::InvalidHiddenMetadataUri("hidden.json".to_string())));
    assert!(errors.contains(&ValidationError::ZeroMaxSupply));
    assert!(errors.contains(&ValidationError::ZeroMintAmount { phase: SalePhase::Whitelist }));
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::InvalidContractAddress(AddressError::InvalidLength { actual: 38, .. })
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::InvalidWhitelistAddress { index: 1, source: AddressError::MissingPrefix(_) }
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::DuplicateWhitelistAddress { index: 2, first_index: 0, .. }
    )));
    assert_eq!(errors.len(), 8);
}

#[test]
fn test_missing_whitelist_file_is_an_error() {
    let yaml = std::fs::read_to_string(fixture("collection.yaml")).unwrap();
    let dir = fixture("broken").join("does-not-exist");
    let err = CollectionConfig::from_yaml_str(&yaml, &dir).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read whitelist file"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = CollectionConfig::load(fixture("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read collection config"));
}

#[test]
fn test_repository_config_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("collection.yaml");
    let cfg = CollectionConfig::load(path).unwrap();

    assert_eq!(cfg, CollectionConfig {
        whitelist_file: cfg.whitelist_file.clone(),
        whitelist_addresses: cfg.whitelist_addresses.clone(),
        ..CollectionConfig::default()
    });
    assert!(cfg.validate().is_empty());
}

#[test]
fn test_whitelist_json_next_to_config_is_loaded_by_default() {
    let cfg = CollectionConfig::load(fixture("implicit/collection.yaml")).unwrap();

    assert_eq!(cfg.whitelist_file, None);
    assert_eq!(cfg.whitelist_addresses.len(), 3);
    assert!(cfg.validate().is_empty());
}

#[test]
fn test_no_whitelist_file_at_all_gives_empty_whitelist() {
    let yaml = std::fs::read_to_string(fixture("implicit/collection.yaml")).unwrap();
    let dir = fixture("implicit").join("does-not-exist");
    let cfg = CollectionConfig::from_yaml_str(&yaml, &dir).unwrap();

    assert!(cfg.whitelist_addresses.is_empty());
}

#[test]
fn test_saved_config_loads_again() {
    let cfg = CollectionConfig::load(fixture("collection.yaml")).unwrap();
    let saved = serde_yaml::to_string(&cfg).unwrap();

    assert!(!saved.contains("whitelist_file"));
    let reloaded = CollectionConfig::from_yaml_str(&saved, &fixture("broken")).unwrap();
    assert_eq!(reloaded, CollectionConfig { whitelist_file: None, ..cfg });
}
