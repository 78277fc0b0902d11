pub mod app;
pub mod config;


use crate::config::DemoConfig;
use cranpose::AppLauncher;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
use wasm_bindgen::prelude::*;

fn create_app(config: &DemoConfig) -> AppLauncher {
    log::info!(
        "launching \"{}\" at {}x{}",
        config.title,
        config.width,
        config.height
    );
    AppLauncher::new()
        .with_title(config.title.clone())
        .with_size(config.width, config.height)
        .with_headless(config.headless)
}

/// Shared entry point for desktop
#[cfg(not(target_os = "android"))]
pub fn entry_point() {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();
    create_app(&DemoConfig::from_env()).run(app::converter_app);
}

/// Android entry point
#[cfg(target_os = "android")]
#[no_mangle]
pub fn android_main(android_app: android_activity::AndroidApp) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("tempconv"),
    );
    create_app(&DemoConfig::default()).run(android_app, app::converter_app);
}

/// Web entry point
#[cfg_attr(all(target_arch = "wasm32", feature = "web"), wasm_bindgen(start))]
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn wasm_entry_point() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    create_app(&DemoConfig::default()).run(app::converter_app);
}
