use crate::{Error, Result};

use rowmap_core::Session;

use std::sync::Arc;
use url::Url;

/// Opens a session for `url`, choosing the driver by URL scheme.
pub(super) async fn connect(url: &str) -> Result<Arc<dyn Session>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_config(format!("invalid connection URL `{url}`: {err}")))?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(&parsed),
        scheme => Err(Error::invalid_config(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Arc<dyn Session>> {
    let session = rowmap_driver_sqlite::Sqlite::new(url.as_str())?;
    Ok(Arc::new(session))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &Url) -> Result<Arc<dyn Session>> {
    Err(Error::invalid_config("`sqlite` feature not enabled"))
}
