use kenya_gov_gateway::domain::payment::PaymentError;
use kenya_gov_gateway::service::payment_service::normalize_gateway_response;
use serde_json::{json, Value};

#[test]
fn success_status_maps_to_outcome() {
    let raw = json!({
        "status": "SUCCESS",
        "transactionId": "T1",
        "paymentUrl": "http://x",
    });

    let outcome = normalize_gateway_response(&raw).expect("should normalize");
    assert_eq!(outcome.transaction_id.as_deref(), Some("T1"));
    assert_eq!(outcome.payment_url.as_deref(), Some("http://x"));
    assert_eq!(outcome.message, "Payment initiated successfully");
}

#[test]
fn failed_status_carries_gateway_message() {
    let raw = json!({ "status": "FAILED", "message": "card declined" });

    match normalize_gateway_response(&raw) {
        Err(PaymentError::PaymentFailed { message, details }) => {
            assert_eq!(message, "card declined");
            assert!(details.is_none());
        }
        other => panic!("expected PaymentFailed, got {other:?}"),
    }
}

#[test]
fn failed_status_without_message_uses_default_text() {
    let raw = json!({ "status": "FAILED", "details": { "reason": "insufficient funds" } });

    match normalize_gateway_response(&raw) {
        Err(PaymentError::PaymentFailed { message, details }) => {
            assert_eq!(message, "Payment initiation failed");
            assert_eq!(details, Some(json!({ "reason": "insufficient funds" })));
        }
        other => panic!("expected PaymentFailed, got {other:?}"),
    }
}

#[test]
fn unrecognized_status_maps_to_unknown() {
    let raw = json!({ "status": "WEIRD" });

    match normalize_gateway_response(&raw) {
        Err(PaymentError::UnknownStatus { details }) => assert_eq!(details, raw),
        other => panic!("expected UnknownStatus, got {other:?}"),
    }
}

#[test]
fn missing_status_field_maps_to_unknown() {
    let raw = json!({ "transactionId": "T1" });
    assert!(matches!(
        normalize_gateway_response(&raw),
        Err(PaymentError::UnknownStatus { .. })
    ));
}

#[test]
fn null_response_is_invalid() {
    assert!(matches!(
        normalize_gateway_response(&Value::Null),
        Err(PaymentError::InvalidResponse)
    ));
}
