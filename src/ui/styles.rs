use eframe::egui::{Color32, CornerRadius, Margin, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for descriptions and hints).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a pill-style badge with white text on `fill`.
    fn badge(&mut self, text: impl Into<String>, fill: Color32);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders a monospace block of shell commands.
    fn code_block(&mut self, text: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn badge(&mut self, text: impl Into<String>, fill: Color32) {
        let text = format!(" {} ", text.into());
        self.label(
            RichText::new(text)
                .small()
                .strong()
                .color(Color32::WHITE)
                .background_color(fill),
        );
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn code_block(&mut self, text: &str) {
        eframe::egui::Frame::new()
            .fill(UI_CONFIG.colors.code_block)
            .inner_margin(Margin::same(8))
            .corner_radius(CornerRadius::same(6))
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(text)
                        .monospace()
                        .color(Color32::from_rgb(74, 222, 128)),
                );
            });
    }
}
