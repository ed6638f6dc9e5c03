use serde::{Deserialize, Serialize};

use super::coin::CoinType;

/// Read-only view over a single token balance, whatever chain it lives on.
pub trait TokenBalance {
    fn token_id(&self) -> &str;
    fn token_name(&self) -> &str;
    fn token_balance(&self) -> &str;
    fn token_balance_fiat(&self) -> Option<&str>;
    fn token_balance_fiat_unit(&self) -> Option<&str>;
}

/// ERC-20 style token, identified by its contract address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTokenBalance {
    pub address: String,
    pub name: String,
    pub balance: String,
    pub balance_fiat: Option<String>,
    pub balance_fiat_unit: Option<String>,
}

impl EthTokenBalance {
    pub fn new(
        address: impl Into<String>,
        name: impl Into<String>,
        balance: impl Into<String>,
        balance_fiat: Option<String>,
        balance_fiat_unit: Option<String>,
    ) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            balance: balance.into(),
            balance_fiat,
            balance_fiat_unit,
        }
    }
}

impl TokenBalance for EthTokenBalance {
    fn token_id(&self) -> &str {
        &self.address
    }

    fn token_name(&self) -> &str {
        &self.name
    }

    fn token_balance(&self) -> &str {
        &self.balance
    }

    fn token_balance_fiat(&self) -> Option<&str> {
        self.balance_fiat.as_deref()
    }

    fn token_balance_fiat_unit(&self) -> Option<&str> {
        self.balance_fiat_unit.as_deref()
    }
}

/// Token balances of every supported chain, storable side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "chain", rename_all = "lowercase")]
pub enum TokenBalanceEntry {
    Eth(EthTokenBalance),
}

impl TokenBalanceEntry {
    fn inner(&self) -> &dyn TokenBalance {
        match self {
            TokenBalanceEntry::Eth(token) => token,
        }
    }
}

impl TokenBalance for TokenBalanceEntry {
    fn token_id(&self) -> &str {
        self.inner().token_id()
    }

    fn token_name(&self) -> &str {
        self.inner().token_name()
    }

    fn token_balance(&self) -> &str {
        self.inner().token_balance()
    }

    fn token_balance_fiat(&self) -> Option<&str> {
        self.inner().token_balance_fiat()
    }

    fn token_balance_fiat_unit(&self) -> Option<&str> {
        self.inner().token_balance_fiat_unit()
    }
}

impl From<EthTokenBalance> for TokenBalanceEntry {
    fn from(token: EthTokenBalance) -> Self {
        TokenBalanceEntry::Eth(token)
    }
}

/// A fiat amount together with its currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount<'a> {
    pub amount: &'a str,
    pub unit: &'a str,
}

/// Balance snapshot of one wallet. Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    coin_type: CoinType,
    balance: String,
    balance_fiat: Option<String>,
    balance_fiat_unit: Option<String>,
    #[serde(default)]
    tokens: Vec<TokenBalanceEntry>,
}

impl WalletBalance {
    pub fn new(
        coin_type: CoinType,
        balance: impl Into<String>,
        balance_fiat: Option<String>,
        balance_fiat_unit: Option<String>,
        tokens: Vec<TokenBalanceEntry>,
    ) -> Self {
        Self {
            coin_type,
            balance: balance.into(),
            balance_fiat,
            balance_fiat_unit,
            tokens,
        }
    }

    /// Native coin balance without any tokens.
    pub fn native(
        coin_type: CoinType,
        balance: impl Into<String>,
        balance_fiat: Option<String>,
        balance_fiat_unit: Option<String>,
    ) -> Self {
        Self::new(coin_type, balance, balance_fiat, balance_fiat_unit, Vec::new())
    }

    pub fn coin_type(&self) -> CoinType {
        self.coin_type
    }

    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn balance_fiat(&self) -> Option<&str> {
        self.balance_fiat.as_deref()
    }

    pub fn balance_fiat_unit(&self) -> Option<&str> {
        self.balance_fiat_unit.as_deref()
    }

    /// Only `Some` when both the amount and the unit are known.
    pub fn fiat(&self) -> Option<FiatAmount<'_>> {
        match (self.balance_fiat(), self.balance_fiat_unit()) {
            (Some(amount), Some(unit)) => Some(FiatAmount { amount, unit }),
            _ => None,
        }
    }

    pub fn tokens(&self) -> &[TokenBalanceEntry] {
        &self.tokens
    }
}
