use actix_web::HttpResponse;
use serde::Serialize;

use crate::errors::ApiError;

pub const STATUS_SUCCESS: &str = "SUCCESS";
pub const STATUS_FAILURE: &str = "FAILURE";

// Envelope shared by every endpoint, success or failure
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        status: STATUS_SUCCESS,
        code: 200,
        result: Some(data),
        error: None,
    })
}
