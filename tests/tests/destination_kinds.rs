use rowmap::Record;
use std::sync::Arc;
use tests::{client, columns, row, MockSession};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    id: i64,
}

#[tokio::test]
async fn shared_record_is_not_writable() {
    let (client, log) = client(MockSession::new());

    let mut user = Arc::new(User::default());
    let _reader = Arc::clone(&user);

    let err = client.query(&mut user, "SELECT id FROM users").await.unwrap_err();

    assert!(err.is_destination_not_writable());
    assert!(log.is_empty());
}

#[tokio::test]
async fn uniquely_owned_arc_is_writable() {
    let (client, _log) = client(MockSession::new().rows(columns!["id"], vec![row![9_i64]]));

    let mut user = Arc::new(User::default());
    client.query(&mut user, "SELECT id FROM users").await.unwrap();

    assert_eq!(user.id, 9);
}

#[tokio::test]
async fn scalar_is_an_unexpected_destination() {
    let (client, log) = client(MockSession::new());

    let mut count = 0_i64;
    let err = client.query(&mut count, "SELECT count(*) FROM users").await.unwrap_err();

    assert!(err.is_unexpected_destination_kind());
    assert_eq!(
        err.to_string(),
        "unexpected destination kind: scalar (i64)"
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn optional_scalar_is_an_unexpected_destination() {
    let (client, log) = client(MockSession::new());

    let mut name: Option<String> = None;
    let err = client.query(&mut name, "SELECT user_name FROM users").await.unwrap_err();

    assert!(err.is_unexpected_destination_kind());
    assert!(log.is_empty());
}

#[tokio::test]
async fn conditional_rejects_sequences() {
    let (client, log) = client(MockSession::new());

    let mut users: Vec<User> = vec![];
    let err = client
        .query_cas(&mut users, "UPDATE users SET id = 1 IF EXISTS")
        .await
        .unwrap_err();

    assert!(err.is_unexpected_destination_kind());
    assert!(log.is_empty());
}

#[tokio::test]
async fn conditional_rejects_shared_records() {
    let (client, log) = client(MockSession::new());

    let mut user = Arc::new(User::default());
    let _reader = user.clone();

    let err = client
        .query_cas(&mut user, "UPDATE users SET id = 1 IF EXISTS")
        .await
        .unwrap_err();

    assert!(err.is_destination_not_writable());
    assert!(log.is_empty());
}
