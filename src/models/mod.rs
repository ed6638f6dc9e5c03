pub mod api_response;
pub mod balance;
pub mod coin;
pub mod serde_func;
pub mod status;
pub mod web_params;
