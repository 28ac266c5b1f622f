use env_logger::{Builder, Env};

/// Send `log` records to stderr so stdout only carries the "Generated" lines.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    // a logger installed earlier (tests) keeps running; nothing to report
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init()
        .ok();
}
