use actix_web::web;
mod handlers;
mod web_message_handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::wallet_balance)
            .service(handlers::list_coins)
            .service(web_message_handlers::receive_web_message),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn post_json(uri: &str, body: &'static str) -> (StatusCode, Value) {
        let app = test::init_service(App::new().configure(super::config)).await;
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn web_message_round_trip() {
        let (status, body) = post_json(
            "/api/v1/web-message",
            r#"{"url": "https://example.com", "status": "ok", "unknown": [1]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(
            body["result"]["params"],
            json!({"url": "https://example.com", "status": "ok"})
        );
        assert!(body["result"]["message_id"].is_string());
        assert!(body["result"]["received_at"].is_string());
    }

    #[actix_web::test]
    async fn malformed_web_message_is_bad_request() {
        let (status, body) = post_json("/api/v1/web-message", "[\"not\", \"an object\"]").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "FAILURE");
        assert_eq!(body["code"], 400);
        assert!(body["result"].is_null());
    }

    #[actix_web::test]
    async fn wallet_balance_from_status() {
        let (status, body) = post_json(
            "/api/v1/wallet/balance",
            r#"{
                "coin": "eth",
                "balance": "2",
                "fiat": "4,000.00 USD",
                "tokens": [{"coin": "DAI", "address": "0x6b175474e89094c44da98b954eedeac495271d0f", "balance": "5", "fiat": "5.00 USD"}]
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["result"],
            json!({
                "coinType": "eth",
                "balance": "2",
                "balanceFiat": "4,000.00",
                "balanceFiatUnit": "USD",
                "tokens": [{
                    "chain": "eth",
                    "address": "0x6b175474e89094c44da98b954eedeac495271d0f",
                    "name": "DAI",
                    "balance": "5",
                    "balanceFiat": "5.00",
                    "balanceFiatUnit": "USD"
                }]
            })
        );
    }

    #[actix_web::test]
    async fn unknown_coin_is_bad_request() {
        let (status, body) = post_json("/api/v1/wallet/balance", r#"{"coin": "ltc"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Unknown coin type: ltc");
    }

    #[actix_web::test]
    async fn lists_coins() {
        let app = test::init_service(App::new().configure(super::config)).await;
        let req = test::TestRequest::get().uri("/api/v1/coins").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["result"],
            json!([{"code": "btc", "enabled": true}, {"code": "eth", "enabled": true}])
        );
    }
}
