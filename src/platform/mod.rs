//! Platform abstraction layer
//!
//! Handles browser/native differences for wall-clock time.

/// Current Unix time in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Current Unix time in milliseconds
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// RNG seed for a new session
pub fn seed_from_clock() -> u64 {
    now_ms()
}
