//! Logsweep's own diagnostic channel, routed through the `log` facade so the
//! host application decides where (and whether) diagnostics end up.
//!
//! Without a logger installed, calls silently vanish; safe during early
//! startup and in tests.

const TARGET: &str = "logsweep";

fn emit(level: log::Level, scope: &str, msg: &str) {
    log::log!(target: TARGET, level, "[{scope}] {msg}");
}

/// High-volume instrumentation, visible only at trace level.
pub fn trace(scope: &str, msg: &str) {
    emit(log::Level::Trace, scope, msg);
}

/// Setup, rollover, and teardown diagnostics.
pub fn debug(scope: &str, msg: &str) {
    emit(log::Level::Debug, scope, msg);
}

/// Normal operational milestones: setup complete, files deleted, etc.
pub fn info(scope: &str, msg: &str) {
    emit(log::Level::Info, scope, msg);
}

/// Non-fatal anomalies, like a file that could not be processed.
pub fn warn(scope: &str, msg: &str) {
    emit(log::Level::Warn, scope, msg);
}

/// Failures that end an operation: listing errors, setup failures.
pub fn error(scope: &str, msg: &str) {
    emit(log::Level::Error, scope, msg);
}
