//! Progress reporting hooks
//!
//! The pipeline calls these after each unit of work. Every method has a
//! no-op default, so observers only implement what they display.

use crate::types::Stage;
use std::path::Path;

pub trait ProgressObserver {
    /// A document is about to be processed (`index` is 0-based)
    fn document_started(&self, _path: &Path, _index: usize, _total: usize) {}

    /// A stage with `total` units of work begins.
    ///
    /// Rasterize counts pages; Compose counts every file written to the
    /// spread directory, copied singles included.
    fn stage_started(&self, _stage: Stage, _total: usize) {}

    /// One unit of the current stage completed
    fn advance(&self, _stage: Stage) {}

    fn stage_finished(&self, _stage: Stage) {}

    /// A document finished, successfully or not
    fn document_finished(&self, _path: &Path, _ok: bool) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
