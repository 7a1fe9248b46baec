use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single lines
    Compact,
    /// JSON lines, for when stderr is collected by a log shipper
    Json,
}

/// Filter used when `RUST_LOG` is not set. Compact output stays quiet so the
/// listing is not buried in log lines.
fn default_directives(format: LogFormat, verbose: bool) -> &'static str {
    match (format, verbose) {
        (_, true) => "bike_catalog=debug,info",
        (LogFormat::Compact, false) => "bike_catalog=warn",
        (LogFormat::Json, false) => "bike_catalog=info",
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(format, verbose)));

    // stdout 只留給列表與匯出內容
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let layer = match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry().with(filter).with(layer).init();
}
