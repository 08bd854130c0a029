//! Route `log` output to the browser console via `console_log`.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// Parse a level name (`"error"` … `"trace"`, `"off"`), defaulting to info.
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger. Later calls only adjust the level.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let filter = parse_level(level);
    if let Some(level) = filter.to_level() {
        // Fails only when a logger is already installed.
        let _ = console_log::init_with_level(level);
    }
    log::set_max_level(filter);
}
