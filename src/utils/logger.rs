//! `log` backend for the browser console.
//!
//! Records are written as `[target] message` through the matching
//! `console` method so the devtools level filter works. Off-browser (unit
//! tests, native builds) records go to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Console-backed logger.
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.target(), &record.args().to_string());

        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{:<5} {}", level_label(record.level()), line);
    }

    fn flush(&self) {}
}

#[cfg(not(target_arch = "wasm32"))]
fn level_label(level: Level) -> &'static str {
    level.as_str()
}

fn format_record(target: &str, message: &str) -> String {
    // Module paths are noise in the console; keep explicit targets only.
    if target.contains("::") {
        message.to_string()
    } else {
        format!("[{}] {}", target, message)
    }
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!(target: "app", "logger already installed");
    }
    log::set_max_level(level);
}
