//! PNG output for finished posters.
//!
//! Writes RGBA8 with a `pHYs` chunk so viewers and print tools pick up the
//! intended resolution.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;

use crate::error::{PosterError, Result};
use crate::types::Colour;

use super::Canvas;

const METERS_PER_INCH: f64 = 0.0254;

/// Padding and border settings for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Uniform padding on every side, in inches.
    pub padding: f64,
    pub border: Colour,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            padding: 0.05,
            border: Colour::WHITE,
        }
    }
}

/// Convert dots per inch to the PNG pixels-per-metre unit.
pub fn dpi_to_ppm(dpi: f64) -> u32 {
    (dpi / METERS_PER_INCH).round().max(1.0) as u32
}

/// Rasterize the canvas with padding into an image.
pub fn export_image(canvas: &Canvas, options: &ExportOptions) -> RgbaImage {
    let padding = (options.padding.max(0.0) * canvas.dpi()).round() as u32;
    canvas.to_image(padding, options.border)
}

/// Encode an image as PNG with DPI metadata.
pub fn encode_png<W: Write>(
    img: &RgbaImage,
    dpi: f64,
    writer: W,
) -> std::result::Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, img.width(), img.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = dpi_to_ppm(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()
}

/// Write a finished canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path, options: &ExportOptions) -> Result<()> {
    let img = export_image(canvas, options);

    let file = File::create(path).map_err(|e| PosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create PNG: {}", e),
    })?;

    encode_png(&img, canvas.dpi(), BufWriter::new(file)).map_err(|e| PosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
