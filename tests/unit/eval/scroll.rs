use super::*;

fn metrics(scroll_top: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        viewport_height,
        document_height,
    }
}

#[test]
fn short_section_enters_from_viewport_bottom() {
    // 400px section at y=2000, 800px viewport.
    let section = ElementBox::new(2000.0, 400.0);

    // Top edge exactly at the viewport bottom.
    assert_eq!(section_progress(metrics(1200.0, 800.0, 5000.0), section), 0.0);
    // Half of it visible.
    assert_eq!(section_progress(metrics(1400.0, 800.0, 5000.0), section), 0.5);
    // Bottom edge exactly at the viewport bottom.
    assert_eq!(section_progress(metrics(1600.0, 800.0, 5000.0), section), 1.0);
    // Far above / below.
    assert_eq!(section_progress(metrics(0.0, 800.0, 5000.0), section), 0.0);
    assert_eq!(section_progress(metrics(4200.0, 800.0, 5000.0), section), 1.0);
}

#[test]
fn tall_section_reports_internal_travel() {
    // 2000px section at y=1000, 800px viewport: 1200px of travel.
    let section = ElementBox::new(1000.0, 2000.0);
    assert_eq!(section_progress(metrics(1000.0, 800.0, 6000.0), section), 0.0);
    assert_eq!(section_progress(metrics(1600.0, 800.0, 6000.0), section), 0.5);
    assert_eq!(section_progress(metrics(2200.0, 800.0, 6000.0), section), 1.0);
    assert_eq!(section_progress(metrics(200.0, 800.0, 6000.0), section), 0.0);
}

#[test]
fn zero_height_section_is_a_step() {
    let section = ElementBox::new(1000.0, 0.0);
    assert_eq!(section_progress(metrics(0.0, 800.0, 3000.0), section), 0.0);
    assert_eq!(section_progress(metrics(200.0, 800.0, 3000.0), section), 1.0);
}

#[test]
fn section_exactly_viewport_tall_uses_entry_policy() {
    let section = ElementBox::new(800.0, 800.0);
    assert_eq!(section_progress(metrics(400.0, 800.0, 3000.0), section), 0.5);
    assert_eq!(section_progress(metrics(800.0, 800.0, 3000.0), section), 1.0);
}

#[test]
fn global_progress_without_overflow_is_one() {
    for top in [0.0, 50.0, -10.0, 1e6] {
        assert_eq!(global_progress(metrics(top, 800.0, 800.0)), 1.0);
        assert_eq!(global_progress(metrics(top, 800.0, 300.0)), 1.0);
    }
}

#[test]
fn global_progress_is_fraction_of_scrollable_height() {
    assert_eq!(global_progress(metrics(0.0, 800.0, 2800.0)), 0.0);
    assert_eq!(global_progress(metrics(1000.0, 800.0, 2800.0)), 0.5);
    assert_eq!(global_progress(metrics(2000.0, 800.0, 2800.0)), 1.0);
    assert_eq!(global_progress(metrics(9000.0, 800.0, 2800.0)), 1.0);
}

#[test]
fn visible_ratio_matches_intersection() {
    let section = ElementBox::new(1000.0, 400.0);
    assert_eq!(visible_ratio(metrics(0.0, 800.0, 4000.0), section), 0.0);
    assert_eq!(visible_ratio(metrics(300.0, 800.0, 4000.0), section), 0.25);
    assert_eq!(visible_ratio(metrics(900.0, 800.0, 4000.0), section), 1.0);
    assert_eq!(visible_ratio(metrics(1300.0, 800.0, 4000.0), section), 0.25);
    assert_eq!(visible_ratio(metrics(0.0, 800.0, 4000.0), ElementBox::new(0.0, 0.0)), 0.0);
}
