use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CustomError;

/// Coin families the wallet knows how to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinType {
    Btc,
    Eth,
}

impl CoinType {
    pub const ALL: [CoinType; 2] = [CoinType::Btc, CoinType::Eth];

    pub fn code(&self) -> &'static str {
        match self {
            CoinType::Btc => "btc",
            CoinType::Eth => "eth",
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            CoinType::Btc => true,
            CoinType::Eth => true,
        }
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CoinType {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoinType::ALL
            .into_iter()
            .find(|coin| coin.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CustomError::UnknownCoinType(s.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct CoinInfo {
    pub code: CoinType,
    pub enabled: bool,
}

impl From<CoinType> for CoinInfo {
    fn from(coin: CoinType) -> Self {
        Self {
            code: coin,
            enabled: coin.is_enabled(),
        }
    }
}
