pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
pub mod test_support;

/// Startup shared by the binary and the WASM entry point: install the
/// panic hook and logger, resolve the runtime config, then mount.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Fleetify Frontend: initializing runtime config");

    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
