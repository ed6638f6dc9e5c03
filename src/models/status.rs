use log::warn;
use serde::Deserialize;

use super::balance::{EthTokenBalance, TokenBalanceEntry, WalletBalance};
use super::coin::CoinType;
use super::serde_func::{deserialize_text_opt, object_from_slice};
use crate::errors::CustomError;

const ZERO_BALANCE: &str = "0";

/// Status update published by the wallet daemon after each refresh.
///
/// Fiat values arrive pre-formatted as `"<amount> <unit>"`, e.g. `"1,024.00 USD"`.
/// Keys this type does not name (icon, sum_fiat, btc_asset, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WalletStatus {
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub coin: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub address: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub balance: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub fiat: Option<String>,
    pub tokens: Option<Vec<TokenStatus>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenStatus {
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub coin: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub address: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub balance: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt")]
    pub fiat: Option<String>,
}

impl WalletStatus {
    pub fn from_slice(payload: &[u8]) -> Result<Self, CustomError> {
        serde_json::from_value(object_from_slice(payload)?)
            .map_err(|e| CustomError::FormatError(e.to_string()))
    }

    pub fn into_balance(self) -> Result<WalletBalance, CustomError> {
        let coin_type: CoinType = self
            .coin
            .as_deref()
            .ok_or_else(|| CustomError::UnknownCoinType(String::new()))?
            .parse()?;

        let (balance_fiat, balance_fiat_unit) = split_fiat(self.fiat.as_deref());
        let token_statuses = self.tokens.unwrap_or_default();
        let tokens = match coin_type {
            CoinType::Eth => token_statuses.into_iter().filter_map(eth_token).collect(),
            CoinType::Btc => {
                if !token_statuses.is_empty() {
                    warn!("dropping {} token entries on a btc wallet", token_statuses.len());
                }
                Vec::new()
            }
        };

        Ok(WalletBalance::new(
            coin_type,
            self.balance.unwrap_or_else(|| ZERO_BALANCE.to_string()),
            balance_fiat,
            balance_fiat_unit,
            tokens,
        ))
    }
}

fn eth_token(token: TokenStatus) -> Option<TokenBalanceEntry> {
    let Some(address) = token.address.filter(|a| !a.is_empty()) else {
        warn!("skipping token {:?} without contract address", token.coin);
        return None;
    };
    let (balance_fiat, balance_fiat_unit) = split_fiat(token.fiat.as_deref());
    Some(
        EthTokenBalance::new(
            address,
            token.coin.unwrap_or_default(),
            token.balance.unwrap_or_else(|| ZERO_BALANCE.to_string()),
            balance_fiat,
            balance_fiat_unit,
        )
        .into(),
    )
}

/// Splits `"12.30 USD"` into amount and unit. Yields both or neither.
fn split_fiat(fiat: Option<&str>) -> (Option<String>, Option<String>) {
    let parts = fiat
        .map(str::trim)
        .and_then(|s| s.rsplit_once(char::is_whitespace))
        .map(|(amount, unit)| (amount.trim(), unit.trim()))
        .filter(|(amount, unit)| !amount.is_empty() && !unit.is_empty());

    match parts {
        Some((amount, unit)) => (Some(amount.to_string()), Some(unit.to_string())),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::balance::TokenBalance;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<WalletBalance, CustomError> {
        WalletStatus::from_slice(value.to_string().as_bytes())?.into_balance()
    }

    #[test]
    fn splits_fiat_strings() {
        assert_eq!(
            split_fiat(Some("1,024.00 USD")),
            (Some("1,024.00".to_string()), Some("USD".to_string()))
        );
        assert_eq!(
            split_fiat(Some("  0.00   CNY ")),
            (Some("0.00".to_string()), Some("CNY".to_string()))
        );
        assert_eq!(split_fiat(Some("12.5")), (None, None));
        assert_eq!(split_fiat(Some("")), (None, None));
        assert_eq!(split_fiat(None), (None, None));
    }

    #[test]
    fn btc_status_becomes_native_balance() {
        let balance = decode(json!({
            "coin": "btc",
            "address": "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
            "icon": "btc.png",
            "balance": "0.5",
            "fiat": "15,000.00 USD",
            "btc_asset": "0.5"
        }))
        .unwrap();

        assert_eq!(balance.coin_type(), CoinType::Btc);
        assert_eq!(balance.balance(), "0.5");
        assert_eq!(balance.balance_fiat(), Some("15,000.00"));
        assert_eq!(balance.balance_fiat_unit(), Some("USD"));
        assert!(balance.tokens().is_empty());
    }

    #[test]
    fn eth_status_keeps_token_order() {
        let balance = decode(json!({
            "coin": "ETH",
            "balance": "1.2",
            "fiat": "2,400.00 USD",
            "tokens": [
                {"coin": "USDT", "address": "0xdac17f958d2ee523a2206206994597c13d831ec7", "balance": "10", "fiat": "10.00 USD"},
                {"coin": "NOADDR", "balance": "1"},
                {"coin": "LINK", "address": "0x514910771af9ca656af840dff83e8264ecf986ca", "balance": "3", "fiat": ""}
            ],
            "sum_fiat": "2,410.00 USD"
        }))
        .unwrap();

        assert_eq!(balance.coin_type(), CoinType::Eth);
        assert_eq!(balance.tokens().len(), 2);

        let usdt = &balance.tokens()[0];
        assert_eq!(usdt.token_id(), "0xdac17f958d2ee523a2206206994597c13d831ec7");
        assert_eq!(usdt.token_name(), "USDT");
        assert_eq!(usdt.token_balance(), "10");
        assert_eq!(usdt.token_balance_fiat(), Some("10.00"));
        assert_eq!(usdt.token_balance_fiat_unit(), Some("USD"));

        let link = &balance.tokens()[1];
        assert_eq!(link.token_name(), "LINK");
        assert_eq!(link.token_balance_fiat(), None);
        assert_eq!(link.token_balance_fiat_unit(), None);
    }

    #[test]
    fn missing_balance_defaults_to_zero() {
        let balance = decode(json!({"coin": "eth", "tokens": null})).unwrap();
        assert_eq!(balance.balance(), "0");
        assert_eq!(balance.fiat(), None);
    }

    #[test]
    fn unknown_or_missing_coin_is_rejected() {
        assert!(matches!(
            decode(json!({"coin": "bsc", "balance": "1"})),
            Err(CustomError::UnknownCoinType(code)) if code == "bsc"
        ));
        assert!(matches!(
            decode(json!({"balance": "1"})),
            Err(CustomError::UnknownCoinType(_))
        ));
    }

    #[test]
    fn non_object_payload_is_format_error() {
        assert!(matches!(
            WalletStatus::from_slice(b"[\"btc\"]"),
            Err(CustomError::FormatError(_))
        ));
    }
}
