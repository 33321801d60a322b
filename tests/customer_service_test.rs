//! Integration tests for customer and card operations against a stubbed
//! transport.

mod common;

use common::MockTransport;
use opalpay::{
    Client, Error,
    models::{
        CardCreateInfo, CardUpdateInfo, CustomerCreateInfo, CustomerUpdateInfo, ListParams,
    },
    transport::Endpoint,
};

const CUSTOMER: &str = r#"{
    "object": "customer",
    "id": "cust_test_123",
    "livemode": false,
    "location": "/customers/cust_test_123",
    "default_card": "card_test_1",
    "email": "john.doe@example.com",
    "description": "John Doe (id: 30)",
    "created": "2014-10-02T10:27:00Z",
    "cards": {
        "object": "list",
        "offset": 0,
        "limit": 20,
        "total": 1,
        "data": [
            {"object": "card", "id": "card_test_1", "brand": "Visa", "last_digits": "4242"}
        ]
    }
}"#;

#[tokio::test]
async fn create_customer() {
    let client = Client::with_transport(MockTransport::stub(200, CUSTOMER));

    let mut info = CustomerCreateInfo::new("john.doe@example.com");
    info.card_token = Some("tokn_test_1".to_owned());

    let customer = client.customers().create(&info).await.unwrap();
    assert_eq!(customer.id, "cust_test_123");
    assert_eq!(customer.cards.unwrap().data[0].id, "card_test_1");

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/customers");
    assert_eq!(
        requests[0].body.as_deref(),
        Some("email=john.doe%40example.com&card=tokn_test_1")
    );
}

#[tokio::test]
async fn create_customer_requires_email() {
    let client = Client::with_transport(MockTransport::new());

    let err = client.customers().create(&CustomerCreateInfo::new("")).await.unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected Validation error, got {err:?}");
    };
    assert_eq!(errors.get("email"), Some("cannot be blank"));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn update_with_token_and_card_rejected_locally() {
    let client = Client::with_transport(MockTransport::new());

    let info = CustomerUpdateInfo {
        card_token: Some("tokn_test_1".to_owned()),
        card: Some(CardCreateInfo::new("JOHN DOE", "4242424242424242", 10, 2027)),
        ..Default::default()
    };
    let err = client.customers().update("cust_test_123", &info).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn update_customer() {
    let client = Client::with_transport(MockTransport::stub(200, CUSTOMER));

    let info = CustomerUpdateInfo {
        email: Some("john.doe@example.com".to_owned()),
        default_card_id: Some("card_test_1".to_owned()),
        ..Default::default()
    };
    client.customers().update("cust_test_123", &info).await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/customers/cust_test_123");
    assert_eq!(
        requests[0].body.as_deref(),
        Some("email=john.doe%40example.com&default_card_id=card_test_1")
    );
}

#[tokio::test]
async fn delete_customer_returns_acknowledgment() {
    let client = Client::with_transport(MockTransport::stub(
        200,
        r#"{"object": "customer", "id": "cust_test_123", "deleted": true}"#,
    ));

    let deleted = client.customers().delete("cust_test_123").await.unwrap();
    assert_eq!(deleted.id, "cust_test_123");
    assert!(deleted.deleted);

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/customers/cust_test_123");
}

#[tokio::test]
async fn missing_customer_surfaces_api_error() {
    let client = Client::with_transport(MockTransport::stub(
        404,
        r#"{"object": "error", "code": "not_found",
            "message": "customer cust_missing was not found"}"#,
    ));

    let err = client.customers().get("cust_missing").await.unwrap_err();

    let Error::Api { status, code, .. } = err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(status, 404);
    assert_eq!(code, "not_found");
}

#[tokio::test]
async fn list_customer_cards() {
    let client = Client::with_transport(MockTransport::stub(
        200,
        r#"{
            "object": "list",
            "offset": 0,
            "limit": 20,
            "total": 1,
            "data": [
                {"object": "card", "id": "card_test_1", "brand": "Visa", "last_digits": "4242"}
            ]
        }"#,
    ));

    let cards = client.cards().list("cust_test_123", &ListParams::default()).await.unwrap();
    assert_eq!(cards.total, 1);
    assert_eq!(cards.data[0].id, "card_test_1");

    let requests = client.transport().requests();
    assert_eq!(requests[0].endpoint, Endpoint::Api);
    assert_eq!(requests[0].path, "/customers/cust_test_123/cards");
}

#[tokio::test]
async fn update_card() {
    let client = Client::with_transport(MockTransport::stub(
        200,
        r#"{"object": "card", "id": "card_test_1", "name": "JANE DOE"}"#,
    ));

    let info = CardUpdateInfo { name: Some("JANE DOE".to_owned()), ..Default::default() };
    let card = client.cards().update("cust_test_123", "card_test_1", &info).await.unwrap();
    assert_eq!(card.name.as_deref(), Some("JANE DOE"));

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/customers/cust_test_123/cards/card_test_1");
    assert_eq!(requests[0].body.as_deref(), Some("name=JANE+DOE"));
}

#[tokio::test]
async fn invalid_card_update_rejected_locally() {
    let client = Client::with_transport(MockTransport::new());

    let info = CardUpdateInfo { expiration_month: Some(13), ..Default::default() };
    let err = client.cards().update("cust_test_123", "card_test_1", &info).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn delete_card() {
    let client = Client::with_transport(MockTransport::stub(
        200,
        r#"{"object": "card", "id": "card_test_1", "deleted": true}"#,
    ));

    let deleted = client.cards().delete("cust_test_123", "card_test_1").await.unwrap();
    assert!(deleted.deleted);

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/customers/cust_test_123/cards/card_test_1");
}
