use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ネイティブトークンの小数桁数（ETH / MATIC ともに 18）
pub const DECIMALS: u32 = 18;
const WEI_PER_UNIT: u128 = 10u128.pow(DECIMALS);

/// 販売フェーズ（ミントが開く順）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalePhase {
    Whitelist,
    PreSale,
    PublicSale,
}

impl SalePhase {
    pub const ALL: [SalePhase; 3] = [SalePhase::Whitelist, SalePhase::PreSale, SalePhase::PublicSale];

    pub fn field_name(self) -> &'static str {
        match self {
            SalePhase::Whitelist => "whitelist_sale",
            SalePhase::PreSale => "pre_sale",
            SalePhase::PublicSale => "public_sale",
        }
    }
}

impl fmt::Display for SalePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalePhase::Whitelist => write!(f, "Whitelist sale"),
            SalePhase::PreSale => write!(f, "Pre-sale"),
            SalePhase::PublicSale => write!(f, "Public sale"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleConfig {
    pub price: Price,
    pub max_mint_amount_per_tx: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price must not be negative: {0}")]
    Negative(String),

    #[error("price is not a decimal number: {0:?}")]
    Malformed(String),

    #[error("price has more than 18 fractional digits: {0}")]
    TooPrecise(String),

    #[error("price is too large: {0}")]
    Overflow(String),

    #[error("price {0} has more than 15 significant digits; quote it as a string to keep it exact")]
    Inexact(String),
}

/// f64 が 10 進で正確に往復できる有効桁数
const F64_EXACT_DIGITS: usize = 15;

/// ミント単価。wei 単位の整数で保持するため負値や丸め誤差は入り込まない。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    wei: u128,
}

impl Price {
    pub const ZERO: Price = Price { wei: 0 };

    pub const fn from_wei(wei: u128) -> Self {
        Price { wei }
    }

    pub const fn wei(&self) -> u128 {
        self.wei
    }

    pub fn is_free(&self) -> bool {
        self.wei == 0
    }

    /// `amount` 枚ミントしたときの合計金額
    pub fn total_for(&self, amount: u32) -> Option<Price> {
        self.wei.checked_mul(amount as u128).map(Price::from_wei)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('-') {
            return Err(PriceError::Negative(text.to_string()));
        }

        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(PriceError::Malformed(text.to_string()));
        }

        let frac = frac.trim_end_matches('0');
        if frac.len() > DECIMALS as usize {
            return Err(PriceError::TooPrecise(text.to_string()));
        }

        let overflow = || PriceError::Overflow(text.to_string());

        let whole_wei = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u128>()
                .map_err(|_| overflow())?
                .checked_mul(WEI_PER_UNIT)
                .ok_or_else(overflow)?
        };

        let frac_wei = if frac.is_empty() {
            0
        } else {
            // frac は 18 桁以下なので u128 に必ず収まる
            let scale = 10u128.pow(DECIMALS - frac.len() as u32);
            frac.parse::<u128>().map_err(|_| overflow())? * scale
        };

        whole_wei
            .checked_add(frac_wei)
            .map(Price::from_wei)
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.wei / WEI_PER_UNIT;
        let frac = self.wei % WEI_PER_UNIT;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let frac = format!("{:0width$}", frac, width = DECIMALS as usize);
        write!(f, "{}.{}", whole, frac.trim_end_matches('0'))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// YAML では `0.001` のような数値でも `"0.001"` のような文字列でも書ける
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Int(u64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match RawPrice::deserialize(deserializer)? {
            RawPrice::Int(n) => n.to_string(),
            RawPrice::Float(x) if x.is_finite() => {
                let text = x.to_string();
                if significant_digits(&text) > F64_EXACT_DIGITS {
                    return Err(serde::de::Error::custom(PriceError::Inexact(text)));
                }
                text
            }
            RawPrice::Float(x) => return Err(serde::de::Error::custom(PriceError::Malformed(x.to_string()))),
            RawPrice::Text(s) => s,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// `x.to_string()` の出力（指数表記なし）に含まれる有効桁数
fn significant_digits(text: &str) -> usize {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_start_matches('0');
    if text.contains('.') {
        digits.len()
    } else {
        digits.trim_end_matches('0').len()
    }
}
