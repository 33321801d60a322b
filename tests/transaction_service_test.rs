//! Integration tests for transaction operations against a stubbed
//! transport.

mod common;

use chrono::{TimeZone, Utc};
use common::MockTransport;
use opalpay::{Client, models::TransactionListParams, transport::Endpoint};

const TRANSACTION_LIST: &str = r#"{
    "object": "list",
    "from": "1970-01-01T07:00:00+07:00",
    "to": "2014-10-02T17:27:36+07:00",
    "offset": 0,
    "limit": 20,
    "total": 2,
    "data": [
        {
            "object": "transaction",
            "id": "123",
            "type": "credit",
            "amount": 9635,
            "currency": "thb",
            "created": "2014-10-02T10:27:00Z"
        },
        {
            "object": "transaction",
            "id": "234",
            "type": "credit",
            "amount": 9635,
            "currency": "thb",
            "created": "2014-10-02T10:27:31Z"
        }
    ]
}"#;

#[tokio::test]
async fn get_all_transactions() {
    let client = Client::with_transport(MockTransport::stub(200, TRANSACTION_LIST));

    let transactions = client.transactions().list(&TransactionListParams::default()).await.unwrap();

    assert_eq!(transactions.limit, 20);
    assert_eq!(transactions.offset, 0);
    assert_eq!(transactions.total, 2);
    assert_eq!(transactions.data.len(), 2);
}

#[tokio::test]
async fn get_all_transactions_with_pagination() {
    let transport = MockTransport::stub(200, TRANSACTION_LIST);
    let client = Client::with_transport(transport);

    let params = TransactionListParams { offset: Some(0), limit: Some(20), ..Default::default() };
    let transactions = client.transactions().list(&params).await.unwrap();

    assert_eq!(transactions.limit, 20);
    assert_eq!(transactions.offset, 0);
    assert_eq!(transactions.total, 2);
    assert_eq!(transactions.data.len(), 2);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].endpoint, Endpoint::Api);
    assert_eq!(requests[0].path, "/transactions?offset=0&limit=20");
}

#[tokio::test]
async fn get_all_transactions_with_window_filter() {
    let client = Client::with_transport(MockTransport::stub(200, TRANSACTION_LIST));

    let params = TransactionListParams {
        from: Some(Utc.with_ymd_and_hms(2014, 10, 1, 0, 0, 0).unwrap()),
        to: Some(Utc.with_ymd_and_hms(2014, 10, 3, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    client.transactions().list(&params).await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(
        requests[0].path,
        "/transactions?from=2014-10-01T00%3A00%3A00Z&to=2014-10-03T00%3A00%3A00Z"
    );
}

#[tokio::test]
async fn get_transaction() {
    let client = Client::with_transport(MockTransport::stub(
        200,
        r#"{
            "object": "transaction",
            "id": "123",
            "type": "credit",
            "amount": 9635,
            "currency": "thb",
            "created": "2014-10-02T10:27:00Z"
        }"#,
    ));

    let transaction = client.transactions().get("123").await.unwrap();

    assert_eq!(transaction.id, "123");
    assert_eq!(transaction.currency, "thb");
    assert_eq!(transaction.kind, "credit");
    assert_eq!(transaction.amount, 9635);
    assert_eq!(transaction.created, Utc.with_ymd_and_hms(2014, 10, 2, 10, 27, 0).unwrap());

    let requests = client.transport().requests();
    assert_eq!(requests[0].path, "/transactions/123");
}
