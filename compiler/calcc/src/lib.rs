//! calc driver.
//!
//! Ties the phases together: parse a [`SourceFile`](calc_diagnostic::SourceFile),
//! skip evaluation if parsing recorded errors, evaluate, and hand back either
//! the final value or the recorded diagnostics.

pub mod commands;
mod eval;

pub use eval::{eval_expr, eval_file, eval_source, EvalFailure, EvalOptions, EvalOutcome};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=calc_eval=debug` or `RUST_LOG=trace`; set
/// `CALC_LOG_TREE=1` for indented span trees. Logs go to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("CALC_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
