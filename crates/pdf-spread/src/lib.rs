pub mod allocate;
pub mod compose;
pub mod convert;
mod discover;
mod io;
mod options;
pub mod plan;
mod progress;
pub mod raster;
mod stats;
mod types;

pub use allocate::{AllocationReport, allocate, execute_plan};
pub use compose::{compose_spread, spread_file_name, spread_geometry};
pub use convert::{
    ConvertReport, DocumentFailure, DocumentOutput, convert, convert_directory, convert_document,
    directory_statistics, output_dir_for, statistics,
};
pub use discover::find_documents;
pub use io::{JPEG_QUALITY, copy_into, load_image, save_jpeg};
pub use options::*;
pub use plan::{AllocationPlan, Pair};
pub use progress::{NoProgress, ProgressObserver};
pub use raster::{RasterBackend, RasterDocument, page_file_name, rasterize};
pub use stats::calculate_statistics;
pub use types::*;

#[cfg(feature = "pdfium")]
pub use raster::PdfiumBackend;
