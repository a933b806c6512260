use rowmap::Record;

#[derive(Debug, Default, Record)]
struct Server {
    #[allow(non_snake_case)]
    ID: i64,
    user_id: i64,
    #[allow(non_snake_case)]
    HTTPServer: String,
    #[allow(non_snake_case)]
    Address2Line: String,
    #[allow(non_snake_case)]
    UserName: String,
    #[column("Login-Name")]
    login: String,
    r#type: String,
}

fn columns() -> Vec<String> {
    <Server as rowmap::schema::Record>::schema()
        .fields()
        .iter()
        .map(|field| field.column_name().into_owned())
        .collect()
}

#[test]
fn derived_column_names() {
    assert_eq!(
        columns(),
        [
            "id",
            "user_id",
            "http_server",
            "address2_line",
            "user_name",
            "Login-Name",
            "type",
        ]
    );
}

#[test]
fn declared_names_are_kept() {
    let schema = <Server as rowmap::schema::Record>::schema();

    let names: Vec<_> = schema.fields().iter().map(|field| field.name).collect();
    assert_eq!(
        names,
        ["ID", "user_id", "HTTPServer", "Address2Line", "UserName", "login", "type"]
    );
    assert_eq!(schema.name(), "Server");
}

#[test]
fn override_replaces_resolved_name() {
    let schema = <Server as rowmap::schema::Record>::schema();

    assert_eq!(schema.index().get("Login-Name"), Some(5));
    assert_eq!(schema.index().get("login"), None);
}

#[test]
fn schema_is_built_once() {
    let a = <Server as rowmap::schema::Record>::schema();
    let b = <Server as rowmap::schema::Record>::schema();

    assert!(std::ptr::eq(a, b));
}
