use heck::ToSnakeCase;
use std::borrow::Cow;

/// Resolves the column name a record field binds to.
///
/// An explicit `column` override is returned verbatim. Otherwise the declared
/// name is converted to lowercase, underscore separated words:
///
/// * a new word starts at each lowercase-or-digit to uppercase transition
///   (`userName` -> `user_name`);
/// * a run of capitals is one word and only splits before the capital that
///   begins the next capitalized word (`UserID` -> `user_id`,
///   `HTTPServer` -> `http_server`);
/// * digits continue the current word (`Address2Line` -> `address2_line`).
///
/// Underscores already present in the declared name are kept as written, so
/// `_id` and `user__id` resolve to themselves. Already normalized names are
/// returned unchanged.
pub fn resolve_column_name<'a>(declared: &'a str, column: Option<&'a str>) -> Cow<'a, str> {
    if let Some(column) = column {
        return Cow::Borrowed(column);
    }

    let snake = declared
        .split('_')
        .map(|segment| segment.to_snake_case())
        .collect::<Vec<_>>()
        .join("_");

    if snake == declared {
        Cow::Borrowed(declared)
    } else {
        Cow::Owned(snake)
    }
}
