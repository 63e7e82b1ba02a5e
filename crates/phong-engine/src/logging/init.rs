use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "debug",
/// "phong_viewer=trace,wgpu=warn"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Explicit(String),
    Env(String),
    Level(log::LevelFilter),
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    if let Some(filter) = &config.env_filter {
        FilterSource::Explicit(filter.clone())
    } else if let Some(filter) = rust_log {
        FilterSource::Env(filter)
    } else {
        FilterSource::Level(config.default_level)
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
///
/// Call early in `main`, before the event loop starts.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Explicit(f) | FilterSource::Env(f) => {
                builder.parse_filters(&f);
            }
            FilterSource::Level(level) => {
                builder.filter_level(level);
                // wgpu is chatty at info.
                builder.filter_module("wgpu_core", log::LevelFilter::Warn);
                builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);

        // Another logger (e.g. a test harness) may already be installed.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
