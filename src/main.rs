use nft_collection_config::config::{CollectionConfig, DEFAULT_CONFIG_PATH};
use nft_collection_config::sale::SalePhase;
use nft_collection_config::{logging, Target};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

fn main() -> Result<()> {
    logging::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = CollectionConfig::load(&path)
        .with_context(|| format!("{} の読み込みに失敗しました", path))?;
    info!(config = %path, "collection config resolved");

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            warn!("{}", e);
        }
        bail!(
            "設定に {} 件の違反があります。`check` で詳細を確認してください。",
            errors.len()
        );
    }

    print_summary(&cfg);

    Ok(())
}

/// デプロイ前に確認する内容を一覧表示
fn print_summary(cfg: &CollectionConfig) {
    println!("==============================");
    println!(" {} ({})", cfg.token_name, cfg.token_symbol);
    println!(" Contract: {}", cfg.contract_name);
    println!("==============================\n");

    for target in [Target::Testnet, Target::Mainnet] {
        let network = cfg.network(target);
        println!("▶ {:?}", target);
        println!("  chain id      {}", network.chain_id);
        println!("  symbol        {}", network.symbol);
        println!("  explorer      {}", network.block_explorer.name);
        match cfg.contract_explorer_url(target) {
            Some(url) => println!("  contract      {}", url),
            None => println!("  contract      (not deployed / no explorer)"),
        }
        println!("  marketplace   {}", cfg.marketplace_url(target));
        println!();
    }

    println!("▶ Sale phases (max supply: {})", cfg.max_supply);
    for phase in SalePhase::ALL {
        let sale = cfg.sale(phase);
        let max_total = sale
            .price
            .total_for(sale.max_mint_amount_per_tx)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "overflow".to_string());
        println!(
            "  {:15} price {:>10}  max/tx {:>3}  (max per tx cost {})",
            phase.to_string(),
            sale.price.to_string(),
            sale.max_mint_amount_per_tx,
            max_total
        );
    }
    println!();

    println!("▶ Hidden metadata: {}", cfg.hidden_metadata_uri);
    println!("▶ Marketplace: {} / {}", cfg.marketplace().name, cfg.marketplace_identifier);
    println!("▶ Whitelist: {} addresses", cfg.whitelist_addresses.len());
}
