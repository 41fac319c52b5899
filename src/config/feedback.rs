//! Timings for transient UI feedback.

use std::time::Duration;

pub struct FeedbackConfig {
    /// How long the "copied" tick stays on a card after a successful copy
    pub copied_flash: Duration,
}

pub const FEEDBACK: FeedbackConfig = FeedbackConfig {
    copied_flash: Duration::from_millis(2000),
};
