use pretty_assertions::assert_eq;
use rowmap::Record;
use tests::{client, columns, row, MockSession};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    id: i64,
    user_name: String,
    nickname: Option<String>,
}

#[tokio::test]
async fn one_element_per_row_in_order() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["id", "user_name"],
        vec![
            row![1_i64, "alice"],
            row![2_i64, "bob"],
            row![3_i64, "carol"],
        ],
    ));

    let mut users: Vec<User> = vec![];
    client.query(&mut users, "SELECT id, user_name FROM users").await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(
        users.iter().map(|u| u.user_name.as_str()).collect::<Vec<_>>(),
        ["alice", "bob", "carol"]
    );
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), [1, 2, 3]);
}

#[tokio::test]
async fn each_row_gets_a_fresh_element() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["id", "nickname"],
        vec![
            vec![rowmap::Value::I64(1), rowmap::Value::from("ally")],
            vec![rowmap::Value::I64(2), rowmap::Value::Null],
        ],
    ));

    let mut users: Vec<User> = vec![];
    client.query(&mut users, "SELECT id, nickname FROM users").await.unwrap();

    assert_eq!(users[0].nickname.as_deref(), Some("ally"));
    assert_eq!(users[1].nickname, None);
}

#[tokio::test]
async fn empty_result_leaves_sequence_empty() {
    let (client, _log) = client(MockSession::new().rows(columns!["id"], vec![]));

    let mut users: Vec<User> = vec![];
    client.query(&mut users, "SELECT id FROM users").await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn scalar_elements_read_first_column() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["user_name", "id"],
        vec![row!["alice", 1_i64], row!["bob", 2_i64]],
    ));

    let mut names: Vec<String> = vec![];
    client.query(&mut names, "SELECT user_name, id FROM users").await.unwrap();

    assert_eq!(names, ["alice", "bob"]);
}

#[tokio::test]
async fn nullable_scalar_elements() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["nickname"],
        vec![vec![rowmap::Value::Null], row!["bo"]],
    ));

    let mut nicknames: Vec<Option<String>> = vec![];
    client.query(&mut nicknames, "SELECT nickname FROM users").await.unwrap();

    assert_eq!(nicknames, [None, Some("bo".to_string())]);
}

#[tokio::test]
async fn failure_keeps_rows_mapped_so_far() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["id"],
        vec![row![1_i64], row!["two"], row![3_i64]],
    ));

    let mut users: Vec<User> = vec![];
    let err = client.query(&mut users, "SELECT id FROM users").await.unwrap_err();

    assert!(err.is_column_scan());
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
}
