//! QR encoder parameters shared by the app and the report binary.

pub struct QrConfig {
    /// Output image edge in pixels (images are square)
    pub width: u32,
    /// Quiet zone, in modules, on each side of the symbol
    pub margin: u32,
    pub dark_color: &'static str,
    pub light_color: &'static str,
}

pub const QR: QrConfig = QrConfig {
    width: 200,
    margin: 2,
    dark_color: "#000000",
    light_color: "#FFFFFF",
};
