// Routes the log macros to the browser console and installs the panic hook.
// Native builds (tests) leave the log facade without a backend.

use std::sync::Once;

static INIT: Once = Once::new();

pub fn init(level: log::Level) {
    INIT.call_once(|| {
        crate::utils::set_panic_hook();
        install(level);
    });
}

#[cfg(target_arch = "wasm32")]
fn install(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"a logger was already installed".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}

// Times a section of work with console.time / console.timeEnd
#[cfg(target_arch = "wasm32")]
pub struct Timer<'a> {
    name: &'a str,
}

#[cfg(target_arch = "wasm32")]
impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(target_arch = "wasm32")]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        web_sys::console::time_end_with_label(self.name);
    }
}
