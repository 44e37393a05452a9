use anyhow::{Context, Result};
use nft_collection_config::config::{CollectionConfig, DEFAULT_CONFIG_PATH};
use nft_collection_config::logging;
use tracing::warn;

fn main() -> Result<()> {
    logging::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = CollectionConfig::load(&path)
        .with_context(|| format!("設定ファイルが読めません: {}", path))?;

    let errors = cfg.validate();

    println!("==============================");
    println!(" Collection Config Check");
    println!(" Contract: {}", cfg.contract_name);
    println!(" Whitelist entries: {}", cfg.whitelist_addresses.len());
    println!("==============================\n");

    if cfg.has_metadata_placeholder() {
        warn!(
            uri = %cfg.hidden_metadata_uri,
            "hidden_metadata_uri にまだ __CID__ が残っています"
        );
    }

    if cfg.contract_address.is_none() {
        println!("(contract_address が未設定のため、デプロイ済みアドレスの検証はスキップしました)\n");
    }

    if errors.is_empty() {
        println!("✅ 違反は見つかりませんでした");
        return Ok(());
    }

    println!("❌ {} 件の違反が見つかりました:", errors.len());
    for e in &errors {
        println!("  - {}", e);
    }

    std::process::exit(1);
}
