//! PDF export: decide which layers become pages and assemble captured page
//! images into a document.
//!
//! Capturing pixels needs a live canvas and lives in
//! [`crate::engine::Engine`]; everything here is plain data so it runs (and is
//! tested) natively. PDF generation is delegated to `printpdf`.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use printpdf::image_crate::{DynamicImage, RgbaImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::consts::{EXPORT_DPI, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::grid::{GridStore, Layer};

const MM_PER_INCH: f32 = 25.4;

/// Errors raised while exporting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export: every layer is empty")]
    NoContent,
    #[error("page image buffer does not match {width}x{height} RGBA")]
    InvalidImage { width: u32, height: u32 },
    #[error("canvas error: {0}")]
    Canvas(String),
    #[error("pdf error: {0}")]
    Pdf(String),
}

/// A captured RGBA raster of the canvas backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, 4 bytes per pixel.
    pub rgba: Vec<u8>,
}

/// Layers that get a page in an all-layers export, ascending. Empty layers are skipped.
#[must_use]
pub fn layers_to_export(grid: &GridStore) -> Vec<Layer> {
    grid.populated_layers().collect()
}

/// Assemble `pages` into a landscape A4 PDF, one image per page stretched to
/// cover the whole page.
///
/// # Errors
///
/// [`ExportError::NoContent`] when `pages` is empty,
/// [`ExportError::InvalidImage`] when a buffer length does not match its size,
/// [`ExportError::Pdf`] when `printpdf` fails to serialize.
pub fn build_pdf(title: &str, pages: &[PageImage]) -> Result<Vec<u8>, ExportError> {
    let Some((first, rest)) = pages.split_first() else {
        return Err(ExportError::NoContent);
    };

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let layer = doc.get_page(first_page).get_layer(first_layer);
    page_image(first)?.add_to_layer(layer, stretch_to_page(first));

    for (n, page) in rest.iter().enumerate() {
        let (page_idx, layer_idx) =
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), format!("Page {}", n + 2));
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        page_image(page)?.add_to_layer(layer, stretch_to_page(page));
    }

    log::info!("assembled pdf '{title}' with {} page(s)", pages.len());
    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Scale factors that stretch an image embedded at [`EXPORT_DPI`] to the full page.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn page_scale(width_px: u32, height_px: u32) -> (f32, f32) {
    let natural_w = width_px.max(1) as f32 * MM_PER_INCH / EXPORT_DPI;
    let natural_h = height_px.max(1) as f32 * MM_PER_INCH / EXPORT_DPI;
    (PAGE_WIDTH_MM / natural_w, PAGE_HEIGHT_MM / natural_h)
}

fn stretch_to_page(page: &PageImage) -> ImageTransform {
    let (scale_x, scale_y) = page_scale(page.width, page.height);
    ImageTransform {
        translate_x: Some(Mm(0.0)),
        translate_y: Some(Mm(0.0)),
        scale_x: Some(scale_x),
        scale_y: Some(scale_y),
        dpi: Some(EXPORT_DPI),
        ..ImageTransform::default()
    }
}

fn page_image(page: &PageImage) -> Result<Image, ExportError> {
    let invalid = || ExportError::InvalidImage { width: page.width, height: page.height };
    let expected = u64::from(page.width) * u64::from(page.height) * 4;
    if page.width == 0 || page.height == 0 || page.rgba.len() as u64 != expected {
        return Err(invalid());
    }
    let rgba = RgbaImage::from_raw(page.width, page.height, page.rgba.clone()).ok_or_else(invalid)?;
    // The canvas background is opaque, so dropping alpha loses nothing.
    let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
    Ok(Image::from_dynamic_image(&DynamicImage::ImageRgb8(rgb)))
}
