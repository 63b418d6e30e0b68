//! Logging setup for browser and native builds.
//!
//! Call sites use the `log` macros. Native builds print through
//! `env_logger`; in the browser, records go through a `tracing` subscriber
//! that writes to the developer console.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes logging once. `default_level` is used unless `RUST_LOG`
/// (native) overrides it.
pub fn init(default_level: &str) {
    INIT.call_once(|| platform::init(default_level));
}

#[cfg(any(target_arch = "wasm32", test))]
fn parse_level(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Warn)
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    pub fn init(default_level: &str) {
        let env = env_logger::Env::default().default_filter_or(default_level);
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            eprintln!("Logger already initialized: {e}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    pub fn init(default_level: &str) {
        console_error_panic_hook::set_once();

        let max_level = super::parse_level(default_level);
        let level = match max_level {
            log::LevelFilter::Off => LevelFilter::OFF,
            log::LevelFilter::Error => LevelFilter::ERROR,
            log::LevelFilter::Warn => LevelFilter::WARN,
            log::LevelFilter::Info => LevelFilter::INFO,
            log::LevelFilter::Debug => LevelFilter::DEBUG,
            log::LevelFilter::Trace => LevelFilter::TRACE,
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(MakeWebConsoleWriter::new())
            .without_time();

        // `try_init` also bridges `log` records into the subscriber.
        if let Err(e) = tracing_subscriber::registry()
            .with(level)
            .with(fmt_layer)
            .try_init()
        {
            web_sys::console::warn_1(&format!("Logger already initialized: {e}").into());
            return;
        }
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("info"), log::LevelFilter::Info);
        assert_eq!(parse_level("DEBUG"), log::LevelFilter::Debug);
        assert_eq!(parse_level("off"), log::LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        assert_eq!(parse_level("loud"), log::LevelFilter::Warn);
    }

    #[test]
    fn init_is_idempotent() {
        init("info");
        init("debug");
    }
}
