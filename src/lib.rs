//! # course-portal
//!
//! Leptos + WASM single-page client for the course portal: login and
//! registration, student/teacher/course views, and a token-guarded profile.
//!
//! Decision logic (`routes`, `state`) is plain Rust with no browser
//! dependency; `pages` and `components` are thin Leptos shells over it.
//! Browser-only glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Install console logging and the panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::build_log_level();
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("course portal starting (log level {level})");
    leptos::mount::mount_to_body(app::App);
}
