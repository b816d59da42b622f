//! Page rasterization
//!
//! Rendering is abstracted behind [`RasterBackend`] so the allocator never
//! depends on a particular PDF library:
//! 1. Open the document through the backend
//! 2. Render every page in order
//! 3. Persist each page as `p00001.jpg`, `p00002.jpg`, ...

#[cfg(feature = "pdfium")]
mod pdfium;

#[cfg(feature = "pdfium")]
pub use pdfium::{PdfiumBackend, PdfiumDocument, init_pdfium};

use crate::io::save_jpeg;
use crate::progress::ProgressObserver;
use crate::types::*;
use image::RgbImage;
use log::debug;
use std::path::{Path, PathBuf};

/// Extension of every raster this crate writes
pub const RASTER_EXTENSION: &str = "jpg";

/// Something that can open PDF documents for rendering
pub trait RasterBackend {
    type Document<'a>: RasterDocument
    where
        Self: 'a;

    fn open_document(&self, path: &Path) -> Result<Self::Document<'_>>;
}

/// An open document whose pages can be rendered one at a time
pub trait RasterDocument {
    fn page_count(&self) -> usize;

    /// Render the page at 0-based `index`
    fn render_page(&self, index: usize) -> Result<RgbImage>;
}

/// File name of the page at 0-based `index`; numbering is 1-based and
/// zero-padded so lexicographic order equals page order.
pub fn page_file_name(index: usize) -> String {
    format!("p{:05}.{}", index + 1, RASTER_EXTENSION)
}

/// Render every page of `pdf` into `out_dir`, returning the page files in order.
///
/// Stops at the first page that fails. Files already written stay on disk.
pub fn rasterize<B: RasterBackend>(
    backend: &B,
    pdf: &Path,
    out_dir: &Path,
    observer: &dyn ProgressObserver,
) -> Result<Vec<PathBuf>> {
    let document = backend.open_document(pdf)?;
    let page_count = document.page_count();

    observer.stage_started(Stage::Rasterize, page_count);

    let mut pages = Vec::with_capacity(page_count);
    for index in 0..page_count {
        let image = document.render_page(index)?;
        let path = out_dir.join(page_file_name(index));
        save_jpeg(&image, &path)?;
        debug!(
            "Rendered page {}/{} ({}x{})",
            index + 1,
            page_count,
            image.width(),
            image.height()
        );
        pages.push(path);
        observer.advance(Stage::Rasterize);
    }

    observer.stage_finished(Stage::Rasterize);
    Ok(pages)
}

/// Page count of `pdf` without rendering anything
pub fn count_pages<B: RasterBackend>(backend: &B, pdf: &Path) -> Result<usize> {
    Ok(backend.open_document(pdf)?.page_count())
}
