use httpmock::prelude::*;
use kenya_gov_gateway::config::BackendConfig;
use kenya_gov_gateway::domain::payment::PaymentRequest;
use kenya_gov_gateway::gateways::ecitizen::EcitizenGateway;
use kenya_gov_gateway::gateways::etims::EtimsGateway;
use kenya_gov_gateway::gateways::gavaconnect::GavaConnectGateway;
use kenya_gov_gateway::gateways::{ProfileGateway, ServiceGateway, TaxGateway};
use serde_json::json;

fn backend(server: &MockServer, api_key: Option<&str>, creds: Option<(&str, &str)>) -> BackendConfig {
    BackendConfig {
        base_url: server.base_url(),
        api_key: api_key.map(ToString::to_string),
        username: creds.map(|(u, _)| u.to_string()),
        password: creds.map(|(_, p)| p.to_string()),
        timeout_ms: 5_000,
    }
}

fn payment_request() -> PaymentRequest {
    PaymentRequest {
        service_id: "PASSPORT_RENEWAL".to_string(),
        amount: 4550.0,
        currency: "KES".to_string(),
        customer_name: "John Doe".to_string(),
        customer_email: "john.doe@example.com".to_string(),
        customer_phone: "+254712345678".to_string(),
        description: "Passport renewal fee".to_string(),
        reference_number: "REF-2025-001".to_string(),
    }
}

#[tokio::test]
async fn etims_sends_bearer_and_api_key_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/tax-rates")
                .header("Authorization", "Bearer secret-key")
                .header("X-API-Key", "secret-key");
            then.status(200)
                .json_body(json!({ "rates": [{ "code": "VAT", "rate": 16 }] }));
        })
        .await;

    let gateway = EtimsGateway::new(&backend(&server, Some("secret-key"), None));
    let rates = gateway.tax_rates().await.expect("tax rates");

    mock.assert_async().await;
    assert_eq!(rates["rates"][0]["code"], "VAT");
}

#[tokio::test]
async fn etims_taxpayer_path_carries_tin() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/taxpayer/A000000001Z");
            then.status(200).json_body(json!({ "tin": "A000000001Z" }));
        })
        .await;

    let gateway = EtimsGateway::new(&backend(&server, Some("secret-key"), None));
    let info = gateway.taxpayer_info("A000000001Z").await.expect("info");

    mock.assert_async().await;
    assert_eq!(info["tin"], "A000000001Z");
}

#[tokio::test]
async fn ecitizen_uses_basic_auth_and_adds_payment_hash() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            // base64("user:pass")
            when.method(POST)
                .path("/payment/initiate")
                .header("Authorization", "Basic dXNlcjpwYXNz")
                .json_body_partial(r#"{ "serviceId": "PASSPORT_RENEWAL" }"#);
            then.status(200).json_body(json!({
                "status": "SUCCESS",
                "transactionId": "TX1",
                "paymentUrl": "https://pay",
            }));
        })
        .await;

    let gateway = EcitizenGateway::new(&backend(&server, None, Some(("user", "pass"))));
    let raw = gateway
        .initiate_payment(&payment_request())
        .await
        .expect("initiate");

    mock.assert_async().await;
    assert_eq!(raw["transactionId"], "TX1");
}

#[tokio::test]
async fn ecitizen_payment_body_contains_hash_field() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/payment/initiate")
                .body_contains("\"hash\":");
            then.status(200).json_body(json!({ "status": "SUCCESS" }));
        })
        .await;

    let gateway = EcitizenGateway::new(&backend(&server, None, Some(("user", "pass"))));
    gateway
        .initiate_payment(&payment_request())
        .await
        .expect("initiate");

    mock.assert_async().await;
}

#[tokio::test]
async fn ecitizen_catalog_fetch_hits_services_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/services");
            then.status(200)
                .json_body(json!([{ "id": "PASSPORT", "name": "Passport Application" }]));
        })
        .await;

    let gateway = EcitizenGateway::new(&backend(&server, None, Some(("user", "pass"))));
    let catalog = gateway.available_services().await.expect("catalog");

    mock.assert_async().await;
    assert_eq!(catalog[0]["id"], "PASSPORT");
}

#[tokio::test]
async fn gavaconnect_profile_roundtrip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/user/u-1/profile")
                .header("Authorization", "Bearer gk");
            then.status(200).json_body(json!({ "userId": "u-1" }));
        })
        .await;

    let gateway = GavaConnectGateway::new(&backend(&server, Some("gk"), None));
    let profile = gateway.user_profile("u-1").await.expect("profile");

    mock.assert_async().await;
    assert_eq!(profile["userId"], "u-1");
}

#[tokio::test]
async fn http_error_status_becomes_error_with_status_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tax-rates");
            then.status(503).body("upstream down");
        })
        .await;

    let gateway = EtimsGateway::new(&backend(&server, Some("k"), None));
    let err = gateway.tax_rates().await.unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("503"), "error should carry the HTTP status: {text}");
}
