use crate::address::{Address, AddressError};
use crate::error::ValidationError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// ホワイトリスト（JSON 配列の順序をそのまま保持）
///
/// 検証時にどのエントリが壊れているかを番号で示せるよう、
/// 読み込み時点ではアドレスを文字列のまま持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Whitelist {
    entries: Vec<String>,
}

impl Whitelist {
    pub fn new(entries: Vec<String>) -> Self {
        Whitelist { entries }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read whitelist file: {:?}", path))?;
        let whitelist: Whitelist = serde_json::from_str(&text)
            .with_context(|| format!("whitelist must be a JSON array of addresses: {:?}", path))?;
        tracing::debug!(path = ?path, entries = whitelist.len(), "whitelist loaded");
        Ok(whitelist)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全エントリをパースする（最初の不正エントリでエラー）
    pub fn addresses(&self) -> Result<Vec<Address>, AddressError> {
        self.entries.iter().map(|e| e.parse()).collect()
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.entries
            .iter()
            .any(|e| e.parse::<Address>().is_ok_and(|a| a == *address))
    }

    /// 不正なアドレスと重複（大文字小文字は区別しない）をすべて列挙する
    pub fn check(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut seen: HashMap<Address, usize> = HashMap::new();

        for (index, entry) in self.entries.iter().enumerate() {
            match entry.parse::<Address>() {
                Ok(address) => {
                    if let Some(&first_index) = seen.get(&address) {
                        errors.push(ValidationError::DuplicateWhitelistAddress {
                            index,
                            first_index,
                            address,
                        });
                    } else {
                        seen.insert(address, index);
                    }
                }
                Err(source) => errors.push(ValidationError::InvalidWhitelistAddress { index, source }),
            }
        }

        errors
    }
}
