use log::Level;

const DEFAULT_WAITLIST_ENDPOINT: &str = "https://formspree.io/f/mgolpvyg";

/// Collection endpoint for waitlist sign-ups. Set `SKOPIO_WAITLIST_ENDPOINT`
/// at build time to point a preview build somewhere else.
pub fn waitlist_endpoint() -> &'static str {
    option_env!("SKOPIO_WAITLIST_ENDPOINT").unwrap_or(DEFAULT_WAITLIST_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Reveal animation
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_OFFSET_PX: u32 = 32;
pub const REVEAL_DURATION_SECS: f64 = 0.7;
pub const REVEAL_SAMPLE_PERIOD_MS: u32 = 100;

// Counters
pub const COUNTER_DURATION_MS: f64 = 1800.0;

// Nav turns solid past this many pixels of scroll
pub const NAV_SOLID_OFFSET_PX: f64 = 40.0;
