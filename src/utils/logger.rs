use tracing_subscriber::{
    fmt, layer::Layered, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

type FilteredRegistry = Layered<EnvFilter, Registry>;

/// Installs a compact console subscriber.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logger(verbose: bool) -> bool {
    let directives = if verbose {
        "small_textkit=debug,info"
    } else {
        "small_textkit=info"
    };
    install(directives, quiet_layer().compact())
}

/// Same as [`init_logger`] with one JSON object per event.
pub fn init_json_logger() -> bool {
    install("small_textkit=info", quiet_layer().json())
}

// RUST_LOG 優先於預設的 directives
fn install<L>(default_directives: &str, format_layer: L) -> bool
where
    L: Layer<FilteredRegistry> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer)
        .try_init()
        .is_ok()
}

fn quiet_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}
