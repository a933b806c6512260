use super::{connect, Client};
use crate::{
    config::{DB_NO_ROWS, DB_URL},
    metrics::{Metrics, NoMetrics},
    Config, Error, Result,
};

use rowmap_core::{map::NoRowsPolicy, Session};

use std::sync::Arc;

/// Configures and connects a [`Client`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Connection URL used by [`Builder::build`]
    url: Option<String>,

    no_rows: NoRowsPolicy,

    /// Sink for call measurements; discarded when unset
    metrics: Option<Arc<dyn Metrics>>,
}

impl Builder {
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Sets what a single-record query does when it returns no rows.
    pub fn no_rows(&mut self, policy: NoRowsPolicy) -> &mut Self {
        self.no_rows = policy;
        self
    }

    /// Reports every client call to `metrics`.
    pub fn metrics(&mut self, metrics: Arc<dyn Metrics>) -> &mut Self {
        self.metrics = Some(metrics);
        self
    }

    /// Applies `DB_URL` and `DB_NO_ROWS` from `config`.
    ///
    /// `DB_URL` is required; `DB_NO_ROWS` keeps the current policy when unset.
    pub fn configure(&mut self, config: &dyn Config) -> Result<&mut Self> {
        let url = config
            .get(DB_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::invalid_config(format!("missing `{DB_URL}`")))?;
        self.url(url);

        if let Some(policy) = config.get(DB_NO_ROWS) {
            let policy: NoRowsPolicy = policy.parse()?;
            self.no_rows(policy);
        }

        Ok(self)
    }

    /// Connects to the configured URL.
    pub async fn build(&mut self) -> Result<Client> {
        let Some(url) = self.url.clone() else {
            return Err(Error::invalid_config(format!("missing `{DB_URL}`")));
        };

        self.connect(&url).await
    }

    /// Connects to `url`, ignoring any configured URL.
    pub async fn connect(&mut self, url: &str) -> Result<Client> {
        let session = connect::connect(url).await.inspect_err(|err| {
            tracing::error!(url, error = %err, "failed to connect");
        })?;

        tracing::info!(url, no_rows = ?self.no_rows, "connected");

        Ok(Client::from_session(session, self.no_rows, self.metrics_sink()))
    }

    /// Builds a client over an existing session.
    pub fn session(&mut self, session: impl Session) -> Client {
        Client::from_session(Arc::new(session), self.no_rows, self.metrics_sink())
    }

    fn metrics_sink(&self) -> Arc<dyn Metrics> {
        self.metrics
            .clone()
            .unwrap_or_else(|| Arc::new(NoMetrics))
    }
}
