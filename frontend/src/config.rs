use log::Level;
use slot_shared::SlotConfig;

const DEFAULT_LOG_LEVEL: Level = Level::Info;

// Both can be overridden at build time, e.g. `SLOT_LOG_LEVEL=debug trunk serve`
pub fn log_level() -> Level {
    option_env!("SLOT_LOG_LEVEL")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn logger_config() -> wasm_logger::Config {
    wasm_logger::Config::new(log_level())
}

pub fn slot_config() -> SlotConfig {
    let mut config = SlotConfig::default();
    if let Some(key) = option_env!("SLOT_STORAGE_KEY") {
        config.storage_key = key.to_string();
    }
    config
}
