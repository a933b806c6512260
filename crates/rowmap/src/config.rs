use std::collections::HashMap;
use std::hash::BuildHasher;

/// Connection URL: `sqlite::memory:` or `sqlite:/path/to/file`.
pub const DB_URL: &str = "DB_URL";

/// Behavior when a single-record query returns no rows: `ignore` or `error`.
pub const DB_NO_ROWS: &str = "DB_NO_ROWS";

/// A source of string configuration values.
pub trait Config {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads configuration from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfig;

impl Config for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> Config for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<S: BuildHasher> Config for HashMap<&str, &str, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|value| value.to_string())
    }
}
