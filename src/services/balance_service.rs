use log::{debug, warn};

use crate::{
    errors::CustomError,
    models::{
        balance::WalletBalance,
        coin::{CoinInfo, CoinType},
        status::WalletStatus,
    },
};

pub struct BalanceService;

impl BalanceService {
    pub fn balance_from_status(payload: &[u8]) -> Result<WalletBalance, CustomError> {
        let status = WalletStatus::from_slice(payload).map_err(|e| {
            warn!("rejected wallet status: {}", e);
            e
        })?;
        debug!("wallet status for {:?} ({:?})", status.address, status.coin);

        let balance = status.into_balance()?;
        debug!(
            "{} balance {} with {} tokens",
            balance.coin_type(),
            balance.balance(),
            balance.tokens().len()
        );
        Ok(balance)
    }

    pub fn supported_coins() -> Vec<CoinInfo> {
        CoinType::ALL.into_iter().map(CoinInfo::from).collect()
    }
}
