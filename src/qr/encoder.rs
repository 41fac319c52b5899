//! QR encoding boundary.
//!
//! The module matrix comes from `qrcode`; rasterising follows the usual
//! browser QR libraries: an exact `width x width` image with a quiet zone of
//! `margin` modules and a fractional per-module scale.

use std::fmt;
use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use qrcode::{Color, QrCode};

use crate::config::QR;

/// Fallback scale when `width` is too small to hold the symbol plus margins.
const FALLBACK_SCALE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Data does not fit in any QR version
    Encode(String),
    /// Colour string is not `#RRGGBB`
    Color(String),
    Png(String),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrError::Encode(msg) => write!(f, "QR encoding failed: {}", msg),
            QrError::Color(value) => write!(f, "Invalid colour: {}", value),
            QrError::Png(msg) => write!(f, "PNG encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for QrError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    pub width: u32,
    pub margin: u32,
    pub dark: String,
    pub light: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: QR.width,
            margin: QR.margin,
            dark: QR.dark_color.to_string(),
            light: QR.light_color.to_string(),
        }
    }
}

/// A rendered code as raw RGB pixels. PNG export is done on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub size: u32,
    /// Row-major, 3 bytes per pixel
    pub rgb: Vec<u8>,
}

impl QrImage {
    pub fn to_png(&self) -> Result<Vec<u8>, QrError> {
        let expected = self.size as usize * self.size as usize * 3;
        if self.rgb.len() != expected {
            return Err(QrError::Png(format!(
                "expected {} bytes of RGB, got {}",
                expected,
                self.rgb.len()
            )));
        }
        let mut png = Vec::new();
        PngEncoder::new(Cursor::new(&mut png))
            .write_image(&self.rgb, self.size, self.size, ExtendedColorType::Rgb8)
            .map_err(|e| QrError::Png(e.to_string()))?;
        Ok(png)
    }

    /// `data:image/png;base64,...`, the form browsers embed directly.
    pub fn to_data_uri(&self) -> Result<String, QrError> {
        Ok(format!("data:image/png;base64,{}", BASE64.encode(self.to_png()?)))
    }
}

pub trait QrEncoder {
    fn encode(&self, data: &str, options: &QrOptions) -> Result<QrImage, QrError>;
}

/// Default encoder backed by `qrcode` + `image`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngQrEncoder;

impl QrEncoder for PngQrEncoder {
    fn encode(&self, data: &str, options: &QrOptions) -> Result<QrImage, QrError> {
        let dark = parse_hex_color(&options.dark)?;
        let light = parse_hex_color(&options.light)?;

        let code = QrCode::new(data.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;
        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        let (size, rgb) = rasterize(&modules, code.width(), options, dark, light);
        Ok(QrImage { size, rgb })
    }
}

/// Paints a square module matrix (`true` = dark) into an RGB buffer.
pub fn rasterize(
    modules: &[bool],
    modules_per_side: usize,
    options: &QrOptions,
    dark: [u8; 3],
    light: [u8; 3],
) -> (u32, Vec<u8>) {
    let margin = options.margin as f64;
    let span = modules_per_side as f64 + margin * 2.0;
    let (scale, size) = if options.width as f64 >= span {
        (options.width as f64 / span, options.width)
    } else {
        (FALLBACK_SCALE, (span * FALLBACK_SCALE).floor() as u32)
    };

    let scaled_margin = margin * scale;
    let inner_end = size as f64 - scaled_margin;
    let last_module = modules_per_side.saturating_sub(1);

    let mut rgb = Vec::with_capacity(size as usize * size as usize * 3);
    for row in 0..size {
        let y = row as f64;
        for col in 0..size {
            let x = col as f64;
            let inside = y >= scaled_margin && x >= scaled_margin && y < inner_end && x < inner_end;
            let is_dark = inside && {
                let src_row = (((y - scaled_margin) / scale).floor() as usize).min(last_module);
                let src_col = (((x - scaled_margin) / scale).floor() as usize).min(last_module);
                modules
                    .get(src_row * modules_per_side + src_col)
                    .copied()
                    .unwrap_or(false)
            };
            rgb.extend_from_slice(if is_dark { &dark } else { &light });
        }
    }
    (size, rgb)
}

/// `#RRGGBB` (leading `#` optional) to bytes.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], QrError> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QrError::Color(value.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| QrError::Color(value.to_string()))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 3] = [0, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    fn pixel(rgb: &[u8], size: u32, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * size + x) * 3) as usize;
        [rgb[i], rgb[i + 1], rgb[i + 2]]
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!(parse_hex_color("#000000"), Ok(BLACK));
        assert_eq!(parse_hex_color("#FFFFFF"), Ok(WHITE));
        assert_eq!(parse_hex_color("1a2B3c"), Ok([0x1a, 0x2b, 0x3c]));
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
    }

    #[test]
    fn raster_is_exact_width_with_light_margin() {
        // 2x2 matrix, top-left dark only
        let modules = [true, false, false, false];
        let options = QrOptions {
            width: 60,
            margin: 2,
            ..QrOptions::default()
        };
        let (size, rgb) = rasterize(&modules, 2, &options, BLACK, WHITE);

        // span = 2 + 4 = 6 modules, scale = 10px
        assert_eq!(size, 60);
        assert_eq!(rgb.len(), 60 * 60 * 3);
        assert_eq!(pixel(&rgb, size, 0, 0), WHITE);
        assert_eq!(pixel(&rgb, size, 19, 19), WHITE);
        assert_eq!(pixel(&rgb, size, 20, 20), BLACK);
        assert_eq!(pixel(&rgb, size, 29, 29), BLACK);
        assert_eq!(pixel(&rgb, size, 30, 20), WHITE);
        assert_eq!(pixel(&rgb, size, 59, 59), WHITE);
    }

    #[test]
    fn narrow_width_falls_back_to_fixed_scale() {
        let modules = [true; 4];
        let options = QrOptions {
            width: 3,
            margin: 1,
            ..QrOptions::default()
        };
        let (size, _) = rasterize(&modules, 2, &options, BLACK, WHITE);
        assert_eq!(size, 16);
    }

    #[test]
    fn encodes_catalog_url_at_configured_width() {
        let image = PngQrEncoder
            .encode(
                "https://link.metamask.io/perps?screen=asset&symbol=BTC",
                &QrOptions::default(),
            )
            .unwrap();
        assert_eq!(image.size, 200);
        assert_eq!(image.rgb.len(), 200 * 200 * 3);
        // Quiet zone corner is light, finder pattern just inside it is dark
        assert_eq!(pixel(&image.rgb, image.size, 0, 0), WHITE);
        assert!(image.rgb.chunks(3).any(|px| px == BLACK));
    }

    #[test]
    fn data_uri_wraps_a_png_of_the_raster() {
        let image = PngQrEncoder
            .encode("https://link.metamask.io/perps", &QrOptions::default())
            .unwrap();
        let uri = image.to_data_uri().unwrap();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        let png = BASE64.decode(payload).unwrap();

        assert_eq!(png, image.to_png().unwrap());
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn short_pixel_buffer_fails_png_export() {
        let image = QrImage {
            size: 4,
            rgb: vec![0; 5],
        };
        assert!(matches!(image.to_png(), Err(QrError::Png(_))));
    }

    #[test]
    fn oversized_data_is_an_encode_error() {
        let huge = "x".repeat(8_000);
        let err = PngQrEncoder.encode(&huge, &QrOptions::default()).unwrap_err();
        assert!(matches!(err, QrError::Encode(_)));
    }

    #[test]
    fn bad_colour_is_reported_before_encoding() {
        let options = QrOptions {
            dark: "black".to_string(),
            ..QrOptions::default()
        };
        let err = PngQrEncoder.encode("https://a", &options).unwrap_err();
        assert_eq!(err, QrError::Color("black".to_string()));
    }
}
