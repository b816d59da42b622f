use pdf_spread::*;

fn options(single_top: bool) -> SpreadOptions {
    SpreadOptions {
        single_top,
        ..Default::default()
    }
}

#[test]
fn test_stats_no_pages() {
    let stats = calculate_statistics(0, &options(true));
    assert_eq!(stats.spreads, 0);
    assert!(!stats.cover);
    assert!(!stats.trailing_single);
    assert_eq!(stats.output_files, 0);
}

#[test]
fn test_stats_single_page() {
    let stats = calculate_statistics(1, &options(false));
    assert_eq!(stats.spreads, 0);
    assert!(stats.trailing_single);
    assert_eq!(stats.output_files, 1);

    let stats = calculate_statistics(1, &options(true));
    assert!(stats.cover);
    assert!(!stats.trailing_single);
    assert_eq!(stats.output_files, 1);
}

#[test]
fn test_stats_five_pages() {
    let stats = calculate_statistics(5, &options(false));
    assert_eq!(stats.spreads, 2);
    assert_eq!(stats.singles(), 1);
    assert!(stats.trailing_single);

    let stats = calculate_statistics(5, &options(true));
    assert_eq!(stats.spreads, 2);
    assert_eq!(stats.singles(), 1);
    assert!(stats.cover);
    assert!(!stats.trailing_single);
}

#[test]
fn test_stats_even_pages_with_cover() {
    let stats = calculate_statistics(8, &options(true));
    assert_eq!(stats.spreads, 3);
    assert_eq!(stats.singles(), 2);
    assert_eq!(stats.output_files, 5);
}

#[test]
fn test_stats_match_allocation_plan() {
    for n in 0..40 {
        for single_top in [false, true] {
            let stats = calculate_statistics(n, &options(single_top));
            let plan = AllocationPlan::new(
                (0..n).collect(),
                single_top,
                ReadingDirection::LeftToRight,
            );

            assert_eq!(stats.source_pages, n);
            assert_eq!(stats.spreads, plan.pairs.len(), "n={n}");
            assert_eq!(stats.cover, plan.cover.is_some(), "n={n}");
            assert_eq!(stats.trailing_single, plan.trailing.is_some(), "n={n}");
            assert_eq!(stats.output_files, plan.pairs.len() + plan.single_count());
        }
    }
}
