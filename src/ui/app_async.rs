use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

use crate::qr::PendingQrBatch;
use crate::ui::app::DeepLinkTesterApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl DeepLinkTesterApp {
    /// Starts rendering codes for the selected environment.
    ///
    /// The previous map is dropped straight away; a batch already in flight is
    /// replaced, and if it still lands it is rejected by its environment tag.
    pub(super) fn start_qr_batch(&mut self) {
        let environment_index = self.state.selected_environment();

        self.qr.clear();
        self.qr_textures.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_qr_batches {
            log::info!("[qr] scheduling batch for environment {}", environment_index);
        }

        self.qr_pending = Some(PendingQrBatch::spawn(
            environment_index,
            self.state.resolved_urls(),
            Arc::clone(&self.encoder),
            self.qr_options.clone(),
        ));
    }

    pub(super) fn poll_qr_batch(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.qr_pending.take() else {
            return;
        };

        match pending.try_take() {
            Ok(batch) => {
                if self.qr.commit(batch, self.state.selected_environment()) {
                    self.qr_textures.clear();
                }
            }
            Err(still_pending) => {
                self.qr_pending = Some(still_pending);
                ctx.request_repaint_after(Duration::from_millis(50));
            }
        }
    }

    pub(super) fn is_generating_qr(&self) -> bool {
        self.qr_pending.is_some()
    }

    /// Texture for `url`, uploaded on first use after a commit.
    pub(super) fn qr_texture(&mut self, ctx: &egui::Context, url: &str) -> Option<egui::TextureHandle> {
        if let Some(texture) = self.qr_textures.get(url) {
            return Some(texture.clone());
        }

        let image = self.qr.get(url)?;
        let side = image.size as usize;
        let color_image = egui::ColorImage::from_rgb([side, side], &image.rgb);
        let texture = ctx.load_texture(format!("qr:{url}"), color_image, egui::TextureOptions::NEAREST);
        self.qr_textures.insert(url.to_string(), texture.clone());

        Some(texture)
    }
}
