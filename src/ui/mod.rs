// User interface components
pub mod app;
pub mod app_async;
pub mod app_state;
pub mod clipboard;
pub mod config;
pub mod copy_feedback;
pub mod styles;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::{DeepLinkTesterApp, LaunchOptions};
pub use app_state::TesterState;
pub use config::UI_CONFIG;
pub use copy_feedback::CopyFeedback;
pub use ui_text::{UI_TEXT, UiText};
