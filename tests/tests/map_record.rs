use pretty_assertions::assert_eq;
use rowmap::{Error, Record, Statement};
use tests::{client, columns, row, ExecKind, MockSession};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    #[allow(non_snake_case)]
    ID: i64,
    #[allow(non_snake_case)]
    UserName: String,
}

#[tokio::test]
async fn exact_columns_fill_every_field() {
    let (client, log) = client(
        MockSession::new().rows(columns!["id", "user_name"], vec![row![42_i64, "alice"]]),
    );

    let mut user = User::default();
    client
        .query(
            &mut user,
            Statement::new("SELECT id, user_name FROM users WHERE id = ?").bind(42_i64),
        )
        .await
        .unwrap();

    assert_eq!(
        user,
        User {
            ID: 42,
            UserName: "alice".into(),
        }
    );
    assert_eq!(log.count(ExecKind::Execute), 1);
    assert_eq!(
        log.last().unwrap().stmt.params(),
        &[rowmap::Value::I64(42)]
    );
}

#[tokio::test]
async fn missing_column_leaves_zero_value() {
    let (client, _log) = client(MockSession::new().rows(columns!["id"], vec![row![42_i64]]));

    let mut user = User::default();
    client.query(&mut user, "SELECT id FROM users").await.unwrap();

    assert_eq!(
        user,
        User {
            ID: 42,
            UserName: String::new(),
        }
    );
}

#[tokio::test]
async fn superset_of_columns_is_accepted() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["created_at", "user_name", "id", "deleted"],
        vec![row![1_700_000_000_i64, "alice", 42_i64, false]],
    ));

    let mut user = User::default();
    client.query(&mut user, "SELECT * FROM users").await.unwrap();

    assert_eq!(user.ID, 42);
    assert_eq!(user.UserName, "alice");
}

#[tokio::test]
async fn numeric_values_widen_into_fields() {
    let (client, _log) = client(MockSession::new().rows(columns!["id"], vec![row![7_i32]]));

    let mut user = User::default();
    client.query(&mut user, "SELECT id FROM users").await.unwrap();

    assert_eq!(user.ID, 7);
}

#[tokio::test]
async fn scan_failure_reports_column_and_keeps_destination() {
    let (client, _log) = client(MockSession::new().rows(
        columns!["user_name", "id"],
        vec![row!["bob", "forty-two"]],
    ));

    let mut user = User {
        ID: 1,
        UserName: "alice".into(),
    };

    let err = client
        .query(&mut user, "SELECT user_name, id FROM users")
        .await
        .unwrap_err();

    assert!(err.is_column_scan());
    assert!(err.to_string().starts_with("failed to scan column `id` (position 1)"));
    assert_eq!(user.UserName, "alice");
}

#[tokio::test]
async fn zero_rows_leave_destination_unchanged() {
    let (client, _log) = client(MockSession::new().rows(columns!["id", "user_name"], vec![]));

    let mut user = User {
        ID: 1,
        UserName: "alice".into(),
    };
    client.query(&mut user, "SELECT * FROM users").await.unwrap();

    assert_eq!(user.ID, 1);
}

#[tokio::test]
async fn zero_rows_error_when_configured() {
    let session = MockSession::new().rows(columns!["id", "user_name"], vec![]);
    let client = rowmap::Client::builder()
        .no_rows(rowmap::NoRowsPolicy::Error)
        .session(session);

    let mut user = User::default();
    let err = client
        .query(&mut user, "SELECT * FROM users")
        .await
        .unwrap_err();

    assert!(err.is_no_rows());
}

#[tokio::test]
async fn session_errors_propagate() {
    let (client, _log) = client(
        MockSession::new().fail(Error::driver(std::io::Error::other("connection reset"))),
    );

    let mut user = User::default();
    let err = client.query(&mut user, "SELECT * FROM users").await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(user, User::default());
}
