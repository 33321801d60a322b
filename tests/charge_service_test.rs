//! Integration tests for charge operations against a stubbed transport.

mod common;

use common::MockTransport;
use opalpay::{
    Client, Error,
    models::{ChargeCreateInfo, ChargeUpdateInfo, ListParams},
    transport::Endpoint,
};

const CHARGE: &str = r#"{
    "object": "charge",
    "id": "chrg_test_123",
    "livemode": false,
    "amount": 100000,
    "currency": "thb",
    "description": "order 1234",
    "capture": true,
    "authorized": true,
    "captured": true,
    "transaction": "trxn_test_999",
    "return_uri": "https://merchant.example/done",
    "card": {"object": "card", "id": "card_test_1", "brand": "Visa", "last_digits": "4242"},
    "customer": "cust_test_1",
    "created": "2014-10-02T10:27:00Z"
}"#;

#[tokio::test]
async fn create_charge() {
    let client = Client::with_transport(MockTransport::stub(200, CHARGE));

    let mut info = ChargeCreateInfo::with_card(
        100_000,
        "thb",
        "https://merchant.example/done",
        "cust_test_1",
        "card_test_1",
    );
    info.description = Some("order 1234".to_owned());

    let charge = client.charges().create(&info).await.unwrap();
    assert_eq!(charge.id, "chrg_test_123");
    assert_eq!(charge.amount, 100_000);
    assert!(charge.captured);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].endpoint, Endpoint::Api);
    assert_eq!(requests[0].path, "/charges");
    assert_eq!(
        requests[0].body.as_deref(),
        Some(
            "amount=100000&currency=thb&description=order+1234\
             &return_uri=https%3A%2F%2Fmerchant.example%2Fdone\
             &capture=true&customer=cust_test_1&card=card_test_1"
        )
    );
}

#[tokio::test]
async fn invalid_charge_never_reaches_transport() {
    let client = Client::with_transport(MockTransport::new());

    let info = ChargeCreateInfo::new(0, "", "");
    let err = client.charges().create(&info).await.unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected Validation error, got {err:?}");
    };
    assert_eq!(errors.get("amount"), Some("must be greater than 0"));
    assert_eq!(errors.get("currency"), Some("cannot be blank"));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn card_without_customer_rejected_locally() {
    let client = Client::with_transport(MockTransport::new());

    let mut info = ChargeCreateInfo::new(100_000, "thb", "https://merchant.example/done");
    info.card_id = Some("card_test_1".to_owned());

    let err = client.charges().create(&info).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn declined_charge_surfaces_api_error() {
    let client = Client::with_transport(MockTransport::stub(
        400,
        r#"{
            "object": "error",
            "location": "https://docs.opalpay.io/api/errors#failed-capture",
            "code": "failed_capture",
            "message": "insufficient funds in the account"
        }"#,
    ));

    let info = ChargeCreateInfo::with_customer(
        100_000,
        "thb",
        "https://merchant.example/done",
        "cust_test_1",
    );
    let err = client.charges().create(&info).await.unwrap_err();

    let Error::Api { status, code, message, location } = err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(status, 400);
    assert_eq!(code, "failed_capture");
    assert_eq!(message, "insufficient funds in the account");
    assert!(location.unwrap().contains("failed-capture"));
}

#[tokio::test]
async fn get_charge() {
    let client = Client::with_transport(MockTransport::stub(200, CHARGE));

    let charge = client.charges().get("chrg_test_123").await.unwrap();
    assert_eq!(charge.id, "chrg_test_123");

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/charges/chrg_test_123");
}

#[tokio::test]
async fn update_charge() {
    let client = Client::with_transport(MockTransport::stub(200, CHARGE));

    let info = ChargeUpdateInfo { description: Some("order 1234".to_owned()) };
    client.charges().update("chrg_test_123", &info).await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/charges/chrg_test_123");
    assert_eq!(requests[0].body.as_deref(), Some("description=order+1234"));
}

#[tokio::test]
async fn capture_charge_posts_empty_body() {
    let client = Client::with_transport(MockTransport::stub(200, CHARGE));

    client.charges().capture("chrg_test_123").await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/charges/chrg_test_123/capture");
    assert_eq!(requests[0].body.as_deref(), Some(""));
}

#[tokio::test]
async fn list_charges() {
    let client = Client::with_transport(MockTransport::stub(
        200,
        &format!(
            r#"{{"object": "list", "offset": 0, "limit": 20, "total": 1, "data": [{CHARGE}]}}"#
        ),
    ));

    let charges = client.charges().list(&ListParams::window(0, 20)).await.unwrap();
    assert_eq!(charges.total, 1);
    assert_eq!(charges.data[0].id, "chrg_test_123");

    let requests = client.transport().requests();
    assert_eq!(requests[0].path, "/charges?offset=0&limit=20");
}

#[tokio::test]
async fn malformed_charge_body_surfaces_decode_error() {
    let client = Client::with_transport(MockTransport::stub(200, r#"{"object": "charge"}"#));

    let err = client.charges().get("chrg_test_123").await.unwrap_err();

    let Error::Decode { context, payload, .. } = err else {
        panic!("expected Decode error, got {err:?}");
    };
    assert_eq!(context, "charge");
    assert!(payload.contains("charge"));
}
