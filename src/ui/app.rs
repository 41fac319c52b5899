use eframe::{Frame, egui};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::environments;
use crate::prefs::{
    EnvironmentPreferenceStore, KeyValueStore, initial_environment, save_environment_index,
};
use crate::qr::{PendingQrBatch, PngQrEncoder, QrOptions, QrState, SharedEncoder};
use crate::ui::app_state::TesterState;
use crate::ui::clipboard::{Clipboard, platform_clipboard};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How the app was launched.
pub struct LaunchOptions {
    /// Session-only environment choice; takes precedence over the saved one
    pub environment_override: Option<usize>,
    /// Slot the environment preference is read from and written to
    pub preference_store: Box<dyn KeyValueStore>,
    /// Overwrite the saved preference with the default before starting
    pub reset_preference: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            environment_override: None,
            preference_store: Box::new(crate::prefs::MemoryStore::new()),
            reset_preference: false,
        }
    }
}

pub struct DeepLinkTesterApp {
    pub(super) state: TesterState,
    pub(super) preferences: EnvironmentPreferenceStore,

    // QR rendering
    pub(super) encoder: SharedEncoder,
    pub(super) qr_options: QrOptions,
    pub(super) qr: QrState,
    pub(super) qr_pending: Option<PendingQrBatch>,
    pub(super) qr_textures: HashMap<String, egui::TextureHandle>,

    pub(super) clipboard: Box<dyn Clipboard>,
    pub(super) show_instructions: bool,
}

impl DeepLinkTesterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: LaunchOptions) -> Self {
        let mut preferences = EnvironmentPreferenceStore::new(options.preference_store);
        let startup = initial_environment(
            options.environment_override,
            &mut preferences,
            cc.storage,
            options.reset_preference,
            environments().len(),
        );

        let mut app = Self {
            state: TesterState::from_startup(startup),
            preferences,
            encoder: Arc::new(PngQrEncoder),
            qr_options: QrOptions::default(),
            qr: QrState::default(),
            qr_pending: None,
            qr_textures: HashMap::new(),
            clipboard: platform_clipboard(&cc.egui_ctx),
            show_instructions: true,
        };

        app.start_qr_batch();
        app
    }

    /// Flips the environment, persists it and re-renders every QR code.
    pub(super) fn toggle_environment(&mut self, frame: &mut Frame) {
        let before = self.state.selected_environment();
        let after = self.state.toggle_environment();
        if before == after {
            return;
        }

        self.preferences.save(after);
        if let Some(storage) = frame.storage_mut() {
            save_environment_index(storage, after);
        }

        self.start_qr_batch();
    }

    pub(super) fn copy_link(&mut self, url: &str, index: usize) {
        self.state
            .copy_link(self.clipboard.as_mut(), url, index, crate::utils::now());
    }

    pub(super) fn open_link(&self, ctx: &egui::Context, url: &str) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[open] {}", url);
        }
        ctx.open_url(egui::OpenUrl::same_tab(url));
    }
}

impl eframe::App for DeepLinkTesterApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // A batch still in flight is simply dropped
        self.qr_pending = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(index) = self.state.persisted_environment() {
            save_environment_index(storage, index);
        }
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_qr_batch(ctx);

        let now = crate::utils::now();
        self.state.tick(now);
        if let Some(remaining) = self.state.copy_feedback.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        self.handle_global_shortcuts(ctx, frame);
        self.render_central_panel(ctx, frame);
    }
}
