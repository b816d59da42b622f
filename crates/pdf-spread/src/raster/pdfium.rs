//! Pdfium-backed rasterization

use super::{RasterBackend, RasterDocument};
use crate::options::SpreadOptions;
use crate::types::*;
use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// Bind Pdfium, trying an explicit library directory, then the vendored
/// library, then falling back to the system library
pub fn init_pdfium(library_dir: Option<&Path>) -> Result<Pdfium> {
    if let Some(dir) = library_dir {
        let binding = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            .map_err(|e| {
                SpreadError::Config(format!(
                    "Failed to load Pdfium from {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        return Ok(Pdfium::new(binding));
    }

    // Vendored copy relative to the working directory
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| SpreadError::Config(format!("Failed to load Pdfium: {}", e)))
}

/// Renders pages at a fixed scale relative to their point size
pub struct PdfiumBackend {
    pdfium: Pdfium,
    scale: f32,
}

impl PdfiumBackend {
    pub fn new(options: &SpreadOptions) -> Result<Self> {
        let pdfium = init_pdfium(options.pdfium_library.as_deref())?;
        Ok(Self {
            pdfium,
            scale: options.render_scale(),
        })
    }
}

impl RasterBackend for PdfiumBackend {
    type Document<'a> = PdfiumDocument<'a>;

    fn open_document(&self, path: &Path) -> Result<PdfiumDocument<'_>> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| SpreadError::Decode(format!("{}: {}", path.display(), e)))?;
        Ok(PdfiumDocument {
            document,
            config: PdfRenderConfig::new().scale_page_by_factor(self.scale),
        })
    }
}

pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
    config: PdfRenderConfig,
}

impl RasterDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize) -> Result<RgbImage> {
        let page_index = PdfPageIndex::try_from(index)
            .map_err(|_| SpreadError::Decode(format!("Page index {} out of range", index)))?;

        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| SpreadError::Decode(format!("Page {}: {}", index + 1, e)))?;

        let bitmap = page
            .render_with_config(&self.config)
            .map_err(|e| SpreadError::Decode(format!("Page {}: {}", index + 1, e)))?;

        Ok(bitmap.as_image().into_rgb8())
    }
}
