//! Spread allocation over page image files

use crate::compose::{compose_spread, spread_file_name};
use crate::io::{copy_into, load_image, save_jpeg};
use crate::options::SpreadOptions;
use crate::plan::{AllocationPlan, Pair};
use crate::progress::ProgressObserver;
use crate::types::*;
use log::debug;
use std::path::{Path, PathBuf};

/// Files written by [`allocate`], in output order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationReport {
    /// Pages copied through unpaired, with their role
    pub singles: Vec<(SingleRole, PathBuf)>,
    /// Composite spreads
    pub spreads: Vec<PathBuf>,
}

/// Allocate page images into singles and spreads inside `out_dir`.
///
/// `pages` must be in document order. Singles are copied byte-for-byte,
/// pairs are composited and re-encoded. The first failure aborts.
pub fn allocate(
    pages: &[PathBuf],
    out_dir: &Path,
    options: &SpreadOptions,
    observer: &dyn ProgressObserver,
) -> Result<AllocationReport> {
    let plan = AllocationPlan::new(
        pages.iter().map(PathBuf::as_path).collect(),
        options.single_top,
        options.reading_direction,
    );
    execute_plan(&plan, out_dir, options.background, observer)
}

/// Write an already computed plan into `out_dir`
pub fn execute_plan(
    plan: &AllocationPlan<&Path>,
    out_dir: &Path,
    background: Background,
    observer: &dyn ProgressObserver,
) -> Result<AllocationReport> {
    let mut report = AllocationReport::default();

    observer.stage_started(Stage::Compose, plan.single_count() + plan.pairs.len());

    for (role, page) in plan
        .cover
        .iter()
        .map(|p| (SingleRole::Cover, p))
        .chain(plan.trailing.iter().map(|p| (SingleRole::Trailing, p)))
    {
        let dest = copy_into(page, out_dir)?;
        debug!("Copied {:?} page {}", role, dest.display());
        report.singles.push((role, dest));
        observer.advance(Stage::Compose);
    }

    for pair in &plan.pairs {
        let dest = compose_pair(pair, out_dir, background)?;
        debug!("Composed spread {}", dest.display());
        report.spreads.push(dest);
        observer.advance(Stage::Compose);
    }
    observer.stage_finished(Stage::Compose);

    Ok(report)
}

/// Composite one pair of page files into a spread file
pub fn compose_pair(pair: &Pair<&Path>, out_dir: &Path, background: Background) -> Result<PathBuf> {
    let left = load_image(pair.left)?;
    let right = load_image(pair.right)?;

    let spread = compose_spread(&left, &right, background);
    let dest = out_dir.join(spread_file_name(pair.left, pair.right));
    save_jpeg(&spread, &dest)?;
    Ok(dest)
}
