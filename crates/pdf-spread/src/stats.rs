use crate::options::SpreadOptions;
use crate::types::*;

/// Calculate what allocating `source_pages` pages will produce
pub fn calculate_statistics(source_pages: usize, options: &SpreadOptions) -> SpreadStatistics {
    let cover = options.single_top && source_pages > 0;
    let pairable = source_pages - usize::from(cover);
    let trailing_single = pairable % 2 == 1;
    let spreads = pairable / 2;

    SpreadStatistics {
        source_pages,
        spreads,
        cover,
        trailing_single,
        output_files: spreads + usize::from(cover) + usize::from(trailing_single),
    }
}
