//! Logo compositing beneath a QR bitmap.

use crate::domain::model::RenderSettings;
use crate::utils::error::Result;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};
use std::io::Cursor;

/// Placement of the logo band under the QR bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub logo_x: u32,
    pub logo_y: u32,
    pub pad_top: u32,
    pub pad_bottom: u32,
}

impl LogoLayout {
    pub fn new(qr_size: (u32, u32), logo_size: (u32, u32), padding_ratio: f64) -> Self {
        let (qr_width, qr_height) = qr_size;
        let (logo_width, logo_height) = logo_size;

        let pad_top = (logo_height as f64 * padding_ratio) as u32;
        let pad_bottom = (logo_height as f64 * padding_ratio) as u32;

        Self {
            canvas_width: qr_width,
            canvas_height: qr_height + logo_height + pad_top + pad_bottom,
            logo_x: qr_width.saturating_sub(logo_width) / 2,
            logo_y: qr_height + pad_top,
            pad_top,
            pad_bottom,
        }
    }
}

pub fn decode_logo(data: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(data)?)
}

/// Shrink `logo` to fit a `max_side` square. Aspect ratio is kept and the
/// logo is never enlarged.
pub fn fit_logo(logo: &DynamicImage, max_side: u32) -> DynamicImage {
    let (width, height) = (logo.width(), logo.height());
    if width <= max_side && height <= max_side {
        return logo.clone();
    }

    let (new_width, new_height) = if width >= height {
        let h = (height as f64 * max_side as f64 / width as f64).round() as u32;
        (max_side, h.clamp(1, max_side))
    } else {
        let w = (width as f64 * max_side as f64 / height as f64).round() as u32;
        (w.clamp(1, max_side), max_side)
    };

    logo.resize_exact(new_width, new_height, FilterType::Lanczos3)
}

pub fn attach_logo(qr: &RgbImage, logo: &DynamicImage, settings: &RenderSettings) -> RgbImage {
    let max_logo_width = ((qr.width() as f64 * settings.logo_max_ratio) as u32).max(1);
    let logo = fit_logo(logo, max_logo_width);

    let layout = LogoLayout::new(
        qr.dimensions(),
        (logo.width(), logo.height()),
        settings.logo_padding_ratio,
    );
    tracing::debug!(
        "Logo {}x{} at ({}, {}), canvas {}x{}",
        logo.width(),
        logo.height(),
        layout.logo_x,
        layout.logo_y,
        layout.canvas_width,
        layout.canvas_height
    );

    let mut canvas = RgbImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        Rgb(settings.light_color),
    );
    image::imageops::replace(&mut canvas, qr, 0, 0);

    if logo.color().has_alpha() {
        overlay(&mut canvas, &logo.to_rgba8(), layout.logo_x, layout.logo_y);
    } else {
        image::imageops::replace(
            &mut canvas,
            &logo.to_rgb8(),
            layout.logo_x as i64,
            layout.logo_y as i64,
        );
    }

    canvas
}

/// Alpha-composite `top` onto `base` at (x, y).
fn overlay(base: &mut RgbImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }

        match pixel[3] {
            0 => {}
            255 => base.put_pixel(target_x, target_y, Rgb([pixel[0], pixel[1], pixel[2]])),
            alpha => {
                let bg = *base.get_pixel(target_x, target_y);
                base.put_pixel(target_x, target_y, blend_pixel(&bg, pixel, alpha));
            }
        }
    }
}

fn blend_pixel(bg: &Rgb<u8>, fg: &image::Rgba<u8>, alpha: u8) -> Rgb<u8> {
    let alpha = alpha as u32;
    let channel = |i: usize| ((fg[i] as u32 * alpha + bg[i] as u32 * (255 - alpha) + 127) / 255) as u8;
    Rgb([channel(0), channel(1), channel(2)])
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}
