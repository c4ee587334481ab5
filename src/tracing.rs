//! Diagnostic logging
//!
//! Two layers:
//! - stderr, switchable at runtime by `log on` / `log off`. When on it
//!   respects RUST_LOG (default `debug`), e.g. `RUST_LOG=lined::dispatch=trace`
//! - a daily-rotated file in `~/.config/lined/logs/lined.log`, always at
//!   debug level for troubleshooting

use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Runtime on/off control of diagnostic output
pub trait LogSwitch {
    fn set_enabled(&self, enabled: bool) -> Result<(), String>;
}

/// [`LogSwitch`] backed by a reloadable stderr filter
pub struct ReloadSwitch {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogSwitch for ReloadSwitch {
    fn set_enabled(&self, enabled: bool) -> Result<(), String> {
        self.handle
            .reload(stderr_filter(enabled))
            .map_err(|e| e.to_string())
    }
}

fn stderr_filter(enabled: bool) -> EnvFilter {
    if enabled {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("off")
    }
}

/// Initialize the global subscriber, returning the stderr switch
pub fn init(enabled: bool) -> ReloadSwitch {
    let (filter, handle) = reload::Layer::<EnvFilter, Registry>::new(stderr_filter(enabled));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .with_filter(filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lined.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    ReloadSwitch { handle }
}

/// Switch that only remembers its state, for sessions without a subscriber
#[derive(Debug, Default)]
pub struct MemorySwitch {
    enabled: std::cell::Cell<bool>,
}

impl MemorySwitch {
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl LogSwitch for MemorySwitch {
    fn set_enabled(&self, enabled: bool) -> Result<(), String> {
        self.enabled.set(enabled);
        Ok(())
    }
}

impl LogSwitch for std::rc::Rc<MemorySwitch> {
    fn set_enabled(&self, enabled: bool) -> Result<(), String> {
        self.as_ref().set_enabled(enabled)
    }
}
