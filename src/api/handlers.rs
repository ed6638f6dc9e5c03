use actix_web::{get, post, web, HttpResponse};

use crate::{
    errors::CustomError, models::api_response::success_response,
    services::balance_service::BalanceService,
};

#[post("/wallet/balance")]
async fn wallet_balance(body: web::Bytes) -> Result<HttpResponse, CustomError> {
    let balance = BalanceService::balance_from_status(&body)?;
    Ok(success_response(balance))
}

#[get("/coins")]
async fn list_coins() -> HttpResponse {
    success_response(BalanceService::supported_coins())
}
