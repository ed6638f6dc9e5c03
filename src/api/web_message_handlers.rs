use actix_web::{post, web, HttpResponse};

use crate::{
    errors::CustomError, models::api_response::success_response,
    services::web_message_service::WebMessageService,
};

// Raw bytes so malformed bodies surface as our FormatError rather than
// actix's extractor error.
#[post("/web-message")]
async fn receive_web_message(body: web::Bytes) -> Result<HttpResponse, CustomError> {
    let receipt = WebMessageService::receive(&body)?;
    Ok(success_response(receipt))
}
