use super::*;

fn layout() -> StaticLayout {
    StaticLayout::new(ScrollMetrics {
        scroll_top: 0.0,
        viewport_height: 800.0,
        document_height: 3000.0,
    })
}

#[test]
fn scroll_is_clamped_to_document() {
    let mut l = layout();
    l.scroll_to(-40.0);
    assert_eq!(l.metrics().scroll_top, 0.0);
    l.scroll_to(10_000.0);
    assert_eq!(l.metrics().scroll_top, 2200.0);
    l.scroll_to(f64::NAN);
    assert_eq!(l.metrics().scroll_top, 0.0);
}

#[test]
fn resize_reclamps_scroll() {
    let mut l = layout();
    l.scroll_to(2200.0);
    l.resize(1200.0);
    assert_eq!(l.metrics().viewport_height, 1200.0);
    assert_eq!(l.metrics().scroll_top, 1800.0);
}

#[test]
fn missing_elements_are_none() {
    let mut l = layout();
    l.insert(ElementId::new("hero"), ElementBox::new(0.0, 900.0));
    assert_eq!(
        l.element_box(&ElementId::new("hero")),
        Some(ElementBox::new(0.0, 900.0))
    );
    assert_eq!(l.element_box(&ElementId::new("cable")), None);
}
