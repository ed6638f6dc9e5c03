use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::{errors::CustomError, models::web_params::WebJsParams};

#[derive(Debug, Serialize)]
pub struct WebMessageReceipt {
    pub message_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub params: WebJsParams,
}

pub struct WebMessageService;

impl WebMessageService {
    /// Decodes a message posted by an embedded page and stamps it for routing.
    pub fn receive(payload: &[u8]) -> Result<WebMessageReceipt, CustomError> {
        let params = WebJsParams::from_slice(payload).map_err(|e| {
            warn!("rejected web message: {}", e);
            e
        })?;

        let receipt = WebMessageReceipt {
            message_id: Uuid::new_v4(),
            received_at: Utc::now(),
            params,
        };
        debug!(
            "web message {} for chain {:?}, url {:?}",
            receipt.message_id, receipt.params.chain, receipt.params.url
        );
        Ok(receipt)
    }
}
