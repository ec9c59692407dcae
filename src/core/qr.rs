//! QR bitmap rendering.

use crate::domain::model::RenderSettings;
use crate::utils::error::Result;
use image::{Rgb, RgbImage};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

/// Encode `data` at error-correction level H.
///
/// Starts at `settings.version`. When the data does not fit and `settings.fit`
/// is set, the smallest version that holds it is used instead.
pub fn encode(data: &str, settings: &RenderSettings) -> Result<QrCode> {
    match QrCode::with_version(data.as_bytes(), Version::Normal(settings.version), EcLevel::H) {
        Ok(code) => Ok(code),
        Err(QrError::DataTooLong) if settings.fit => {
            tracing::debug!(
                "Payload ({} bytes) exceeds version {}, fitting",
                data.len(),
                settings.version
            );
            Ok(QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Paint `code` as an RGB bitmap with a quiet zone of `settings.border` modules.
pub fn render_bitmap(code: &QrCode, settings: &RenderSettings) -> RgbImage {
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let scale = settings.module_size.max(1);
    let img_size = (module_count + 2 * settings.border) * scale;

    let mut img = RgbImage::from_pixel(img_size, img_size, Rgb(settings.light_color));
    let dark = Rgb(settings.dark_color);
    let offset = settings.border * scale;

    for (i, color) in modules.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;
        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, dark);
            }
        }
    }

    img
}

pub fn generate_qr(data: &str, settings: &RenderSettings) -> Result<RgbImage> {
    let code = encode(data, settings)?;
    Ok(render_bitmap(&code, settings))
}
