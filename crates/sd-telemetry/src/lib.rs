//! Logging infrastructure for the servicedesk binaries.
//!
//! A thin wrapper over the `tracing` ecosystem: human-readable output for
//! interactive use, JSON output when the logs are shipped somewhere. The TUI
//! defaults to `warn` so stray log lines never corrupt the alternate screen.

pub mod logging;
