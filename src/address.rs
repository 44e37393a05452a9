use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// EVM アドレス長（バイト）
pub const ADDRESS_LEN: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x: {0:?}")]
    MissingPrefix(String),

    #[error("address must have {expected} hex digits, got {actual}: {input:?}")]
    InvalidLength {
        input: String,
        expected: usize,
        actual: usize,
    },

    #[error("address contains non-hex characters: {0:?}")]
    InvalidHex(String),
}

/// 20 バイトの EVM アドレス
///
/// 入力は大文字小文字を問わず受け付け、表示は常に小文字に正規化する。
/// ホワイトリストの重複判定もこの正規化済みの値で行う。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix(s.to_string()))?;

        if digits.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength {
                input: s.to_string(),
                expected: ADDRESS_LEN * 2,
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AddressError::InvalidHex(s.to_string()))?;
        Ok(Address(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
