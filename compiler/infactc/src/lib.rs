//! The `infact` command-line tool.
//!
//! Evaluates configuration files without any host code: every construction
//! spec is built as a generic [`Record`] by the [`RecordFactory`].

pub mod commands;
mod record;

use std::sync::Once;

pub use record::{Record, RecordFactory};

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Does nothing unless `RUST_LOG` is set; spans and events are then printed
/// to stderr as a tree, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
