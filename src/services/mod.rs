pub mod balance_service;
pub mod web_message_service;
