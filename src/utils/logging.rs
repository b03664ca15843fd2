use tracing_subscriber::EnvFilter;

pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if json {
        // ANSI color codes are noise once the output is collected as JSON.
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
