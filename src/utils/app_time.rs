//! Monotonic clock that works in the browser.
//!
//! `web_time` re-exports `std::time` natively and wraps `performance.now()`
//! on wasm32, so both targets share one type.

pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
