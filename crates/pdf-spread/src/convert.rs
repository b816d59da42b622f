//! Directory conversion
//!
//! This module orchestrates the whole run:
//! 1. Find source PDFs under the input directory
//! 2. Rasterize each one into a sibling output directory
//! 3. Allocate the page images into `conc/` inside it

use crate::allocate::{AllocationReport, allocate};
use crate::discover::find_documents;
use crate::options::SpreadOptions;
use crate::progress::ProgressObserver;
use crate::raster::{RasterBackend, count_pages, rasterize};
use crate::stats::calculate_statistics;
use crate::types::*;
use log::{info, warn};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Subdirectory of the document output that receives singles and spreads
pub const SPREAD_DIR_NAME: &str = "conc";

/// Output directory for `pdf`: `X.pdf` becomes `X[-singletop][-vertical]`
/// next to the source.
pub fn output_dir_for(pdf: &Path, options: &SpreadOptions) -> PathBuf {
    let mut name = pdf.file_stem().map(OsString::from).unwrap_or_default();
    if options.single_top {
        name.push("-singletop");
    }
    if options.vertical() {
        name.push("-vertical");
    }
    pdf.with_file_name(name)
}

/// Everything written for one source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutput {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Rasterized pages in document order
    pub pages: Vec<PathBuf>,
    pub allocation: AllocationReport,
}

/// A document that failed while the run kept going
#[derive(Debug)]
pub struct DocumentFailure {
    pub source: PathBuf,
    pub error: SpreadError,
}

/// Outcome of a directory conversion
#[derive(Debug, Default)]
pub struct ConvertReport {
    pub converted: Vec<DocumentOutput>,
    pub failures: Vec<DocumentFailure>,
}

impl ConvertReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn spread_count(&self) -> usize {
        self.converted
            .iter()
            .map(|doc| doc.allocation.spreads.len())
            .sum()
    }
}

/// Rasterize and allocate a single PDF
pub fn convert_document<B: RasterBackend>(
    backend: &B,
    pdf: &Path,
    options: &SpreadOptions,
    observer: &dyn ProgressObserver,
) -> Result<DocumentOutput> {
    let output_dir = output_dir_for(pdf, options);
    std::fs::create_dir_all(&output_dir)?;

    let pages = rasterize(backend, pdf, &output_dir, observer)?;

    let spread_dir = output_dir.join(SPREAD_DIR_NAME);
    std::fs::create_dir_all(&spread_dir)?;

    let allocation = allocate(&pages, &spread_dir, options, observer)?;

    Ok(DocumentOutput {
        source: pdf.to_path_buf(),
        output_dir,
        pages,
        allocation,
    })
}

/// Convert every PDF in the input directory, one after another.
///
/// Without `keep_going` the first failing document aborts the run; with it,
/// failures are collected in the report and the remaining documents still run.
/// Two sources that map to the same output directory (`a.pdf` and `a.PDF`)
/// never share it: the later one fails with [`SpreadError::OutputCollision`].
pub fn convert_directory<B: RasterBackend>(
    backend: &B,
    options: &SpreadOptions,
    observer: &dyn ProgressObserver,
) -> Result<ConvertReport> {
    options.validate()?;

    let documents = find_documents(&options.input_dir, options.recursive)?;
    info!(
        "Found {} PDF file(s) in {}",
        documents.len(),
        options.input_dir.display()
    );

    let mut report = ConvertReport::default();
    let total = documents.len();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for (index, pdf) in documents.into_iter().enumerate() {
        info!("Processing: {}", pdf.display());
        observer.document_started(&pdf, index, total);

        let result = claim_output_dir(&mut claimed, &pdf, options)
            .and_then(|()| convert_document(backend, &pdf, options, observer));

        match result {
            Ok(output) => {
                observer.document_finished(&pdf, true);
                info!(
                    "{}: {} page(s), {} spread(s)",
                    pdf.display(),
                    output.pages.len(),
                    output.allocation.spreads.len()
                );
                report.converted.push(output);
            }
            Err(error) => {
                observer.document_finished(&pdf, false);
                if !options.keep_going {
                    return Err(error);
                }
                warn!("Skipping {}: {}", pdf.display(), error);
                report.failures.push(DocumentFailure { source: pdf, error });
            }
        }
    }

    Ok(report)
}

fn claim_output_dir(
    claimed: &mut HashMap<PathBuf, PathBuf>,
    pdf: &Path,
    options: &SpreadOptions,
) -> Result<()> {
    let output_dir = output_dir_for(pdf, options);
    if let Some(owner) = claimed.get(&output_dir) {
        return Err(SpreadError::OutputCollision {
            source_pdf: pdf.to_path_buf(),
            output_dir,
            claimed_by: owner.clone(),
        });
    }
    claimed.insert(output_dir, pdf.to_path_buf());
    Ok(())
}

/// Predict the allocation of every PDF in the input directory without writing
pub fn directory_statistics<B: RasterBackend>(
    backend: &B,
    options: &SpreadOptions,
) -> Result<Vec<(PathBuf, SpreadStatistics)>> {
    options.validate()?;

    find_documents(&options.input_dir, options.recursive)?
        .into_iter()
        .map(|pdf| -> Result<(PathBuf, SpreadStatistics)> {
            let pages = count_pages(backend, &pdf)?;
            Ok((pdf, calculate_statistics(pages, options)))
        })
        .collect()
}

/// Run [`convert_directory`] on a blocking worker.
///
/// The backend is built inside the worker, so it never has to cross threads.
pub async fn convert<B, F, O>(
    options: &SpreadOptions,
    make_backend: F,
    observer: O,
) -> Result<ConvertReport>
where
    B: RasterBackend,
    F: FnOnce(&SpreadOptions) -> Result<B> + Send + 'static,
    O: ProgressObserver + Send + 'static,
{
    options.validate()?;

    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let backend = make_backend(&options)?;
        convert_directory(&backend, &options, &observer)
    })
    .await?
}

/// Run [`directory_statistics`] on a blocking worker
pub async fn statistics<B, F>(
    options: &SpreadOptions,
    make_backend: F,
) -> Result<Vec<(PathBuf, SpreadStatistics)>>
where
    B: RasterBackend,
    F: FnOnce(&SpreadOptions) -> Result<B> + Send + 'static,
{
    options.validate()?;

    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let backend = make_backend(&options)?;
        directory_statistics(&backend, &options)
    })
    .await?
}
