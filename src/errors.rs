use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::{ApiResponse, STATUS_FAILURE};

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Malformed payload: {0}")]
    FormatError(String),

    #[error("Unknown coin type: {0}")]
    UnknownCoinType(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::FormatError(_) => StatusCode::BAD_REQUEST,
            CustomError::UnknownCoinType(_) => StatusCode::BAD_REQUEST,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        };

        let response = ApiResponse {
            status: STATUS_FAILURE,
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        HttpResponse::build(status).json(response)
    }
}
