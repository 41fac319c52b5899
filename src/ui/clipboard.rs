//! Clipboard boundary.

use anyhow::Result;
#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context as _;
use eframe::egui;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard via arboard. Opened on first use so a missing clipboard only
/// surfaces when copying.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Failed to open system clipboard")?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text.to_owned())
            .context("Failed to write to system clipboard")
    }
}

/// Hands the text to egui, which forwards it to the platform at end of frame.
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Clipboard for EguiClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.ctx.copy_text(text.to_owned());
        Ok(())
    }
}

/// The clipboard the app uses on this platform.
pub fn platform_clipboard(_ctx: &egui::Context) -> Box<dyn Clipboard> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(SystemClipboard::default())
    }

    #[cfg(target_arch = "wasm32")]
    {
        Box::new(EguiClipboard::new(_ctx.clone()))
    }
}
