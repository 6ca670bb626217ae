/// Base URL prepended to every API path. Empty means same origin.
pub fn get_backend_url() -> &'static str {
    option_env!("STOCKY_BACKEND_URL").unwrap_or("")
}

pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Upper bound on how long a waitlist request may keep the form in its loading state.
pub const WAITLIST_TIMEOUT_MS: u32 = 8_000;

/// Share of a section that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Share of a number that has to be on screen before it starts counting.
pub const COUNT_UP_THRESHOLD: f64 = 0.5;

pub const DEFAULT_COUNT_UP_DURATION_MS: u32 = 2_000;

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
