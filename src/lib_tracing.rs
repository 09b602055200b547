use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{filter, prelude::*};

/// Installs the library's tracing subscriber: pretty stdout output at INFO,
/// plus an optional file layer capturing everything.
///
/// Safe to call more than once; later calls leave the installed subscriber
/// in place.
pub fn init(debug_log: Option<&Path>) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(filter::LevelFilter::INFO);

    match debug_log {
        Some(path) => {
            let file = File::create(path)?;
            let file_log = tracing_subscriber::fmt::layer().with_writer(Arc::new(file));
            tracing_subscriber::registry()
                .with(stdout_log.and_then(file_log))
                .try_init()
                .ok();
        }
        None => {
            tracing_subscriber::registry()
                .with(stdout_log)
                .try_init()
                .ok();
        }
    }

    Ok(())
}
