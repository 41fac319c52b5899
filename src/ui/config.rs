use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub symbol_badge: Color32,
    pub new_badge: Color32,
    pub hip3_badge: Color32,
    pub copied: Color32,
    pub production: Color32,
    pub development: Color32,
    pub code_block: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_width: f32,
    /// Displayed QR edge in points
    pub qr_display_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(235, 235, 235),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(24, 26, 30),
        card: Color32::from_rgb(36, 39, 45),
        card_border: Color32::from_rgb(60, 64, 72),
        symbol_badge: Color32::from_rgb(37, 99, 235),
        new_badge: Color32::from_rgb(22, 163, 74),
        hip3_badge: Color32::from_rgb(126, 34, 206),
        copied: Color32::from_rgb(130, 200, 140),
        production: Color32::from_rgb(100, 200, 100),
        development: Color32::from_rgb(255, 200, 100),
        code_block: Color32::from_rgb(17, 24, 39),
    },
    card_width: 320.0,
    qr_display_size: 192.0,
};
