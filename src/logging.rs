//! Browser console logging.
//!
//! Routes `log` records to the devtools console and installs the panic hook so
//! WASM panics show a readable message. Outside the browser this is a no-op.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize logging at `level`. Idempotent; only the first call takes effect.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        #[cfg(feature = "csr")]
        init_console(level);
        #[cfg(not(feature = "csr"))]
        let _ = level;
    });
}

#[cfg(feature = "csr")]
fn init_console(level: LevelFilter) {
    console_error_panic_hook::set_once();
    let Some(level) = level.to_level() else {
        return;
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
}
