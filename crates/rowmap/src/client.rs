mod builder;
pub use builder::Builder;

mod connect;

use crate::{
    metrics::{Metrics, NoMetrics, Operation, Outcome},
    Config, Result,
};

use rowmap_core::{
    map::{ConditionalMapper, IntoDestination, NoRowsPolicy, ResultMapper},
    stmt::Statement,
    Session,
};

use std::{future::Future, sync::Arc, time::Instant};

/// A handle for running statements and mapping their results.
///
/// Cloning is cheap; clones share the underlying session.
#[derive(Debug, Clone)]
pub struct Client {
    session: Arc<dyn Session>,
    results: ResultMapper,
    conditional: ConditionalMapper,
    metrics: Arc<dyn Metrics>,
}

impl Client {
    /// Wraps an existing session with the default mapping behavior.
    pub fn new(session: impl Session) -> Self {
        Self::from_session(Arc::new(session), NoRowsPolicy::default(), Arc::new(NoMetrics))
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        Builder::default().connect(url).await
    }

    /// Connects using the `DB_URL` and `DB_NO_ROWS` keys of `config`.
    pub async fn from_config(config: &dyn Config) -> Result<Self> {
        Builder::default().configure(config)?.build().await
    }

    pub(crate) fn from_session(
        session: Arc<dyn Session>,
        no_rows: NoRowsPolicy,
        metrics: Arc<dyn Metrics>,
    ) -> Self {
        Self {
            session,
            results: ResultMapper::new().with_no_rows(no_rows),
            conditional: ConditionalMapper::new(),
            metrics,
        }
    }

    /// Runs `stmt` and maps its rows into `destination`.
    ///
    /// A record receives the first row; a `Vec` receives one element per row.
    pub async fn query<D>(&self, destination: &mut D, stmt: impl Into<Statement>) -> Result<()>
    where
        D: IntoDestination + ?Sized,
    {
        let stmt = stmt.into();

        self.measure(Operation::Query, self.results.map(&*self.session, destination, &stmt))
            .await
            .inspect_err(|err| tracing::error!(sql = stmt.sql(), error = %err, "query failed"))
    }

    /// Runs a conditional write, copies the returned row into `destination`
    /// and reports whether the write was applied.
    pub async fn query_cas<D>(&self, destination: &mut D, stmt: impl Into<Statement>) -> Result<bool>
    where
        D: IntoDestination + ?Sized,
    {
        let stmt = stmt.into();

        self.measure(
            Operation::QueryCas,
            self.conditional.map(&*self.session, destination, &stmt),
        )
        .await
        .inspect_err(|err| {
                tracing::error!(sql = stmt.sql(), error = %err, "conditional write failed")
            })
    }

    /// Runs `stmt` without mapping any result.
    pub async fn exec(&self, stmt: impl Into<Statement>) -> Result<()> {
        let stmt = stmt.into();

        tracing::debug!(sql = stmt.sql(), params = stmt.params().len(), "executing statement");

        self.measure(Operation::Exec, self.session.exec(&stmt))
            .await
            .inspect_err(|err| tracing::error!(sql = stmt.sql(), error = %err, "statement failed"))
    }

    /// The session statements run on.
    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    pub fn no_rows(&self) -> NoRowsPolicy {
        self.results.no_rows()
    }

    /// The sink every call is measured into.
    pub fn metrics(&self) -> &Arc<dyn Metrics> {
        &self.metrics
    }

    async fn measure<T>(
        &self,
        operation: Operation,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let start = Instant::now();
        let res = call.await;

        self.metrics.record(operation, Outcome::of(&res), start.elapsed());

        res
    }
}
