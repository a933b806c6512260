mod exec_log;
pub use exec_log::{ExecKind, ExecLog, Executed};


mod mock_session;
pub use mock_session::MockSession;

use rowmap::Client;

/// Installs a test-friendly tracing subscriber; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Builds a client over `session` and returns it with the session's log.
pub fn client(session: MockSession) -> (Client, ExecLog) {
    init_tracing();

    let log = session.exec_log();
    (Client::new(session), log)
}
