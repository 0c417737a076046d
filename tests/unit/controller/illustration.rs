use super::*;
use crate::controller::segment::SegmentState;
use crate::eval::layout::{Layout, StaticLayout};
use crate::eval::scroll::{ElementBox, ScrollMetrics, global_progress};
use crate::style::batch::StyleWrite;

fn layout(scroll_top: f64) -> StaticLayout {
    let mut l = StaticLayout::new(ScrollMetrics {
        scroll_top,
        viewport_height: 800.0,
        document_height: 4000.0,
    });
    // 400px tall: progress = (scroll_top + 800 - 1000) / 400.
    l.insert(ElementId::new("map"), ElementBox::new(1000.0, 400.0));
    l
}

fn controller() -> IllustrationController {
    IllustrationController::new(
        ElementId::new("map"),
        vec![
            Segment::new(ElementId::new("road-a"), 100.0, 0.0, 0.5),
            Segment::new(ElementId::new("road-b"), 300.0, 0.5, 1.0),
        ],
    )
}

fn run(c: &mut IllustrationController, l: &StaticLayout) -> StyleBatch {
    let mut out = StyleBatch::new();
    let metrics = l.metrics();
    let ctx = FrameCtx {
        layout: l,
        metrics,
        global: global_progress(metrics),
    };
    c.update(&ctx, &mut out);
    out
}

#[test]
fn segments_follow_section_progress() {
    let mut c = controller();
    let mut setup = StyleBatch::new();
    c.setup(&mut setup);
    assert_eq!(setup.last_number(&ElementId::new("road-b"), props::PATH_LENGTH), Some(300.0));

    // Local progress 0.25: first road drawing, second still dotted.
    let out = run(&mut c, &layout(300.0));
    assert_eq!(out.last_number(&ElementId::new("map"), props::SECTION_PROGRESS), Some(0.25));
    assert_eq!(c.segments()[0].state(), SegmentState::Drawing);
    assert_eq!(c.segments()[1].state(), SegmentState::Dotted);

    // Local progress 1: both complete.
    run(&mut c, &layout(600.0));
    assert!(c.segments().iter().all(|s| s.state() == SegmentState::Complete));

    // Back to 0.75: first stays complete, second regresses to drawing.
    run(&mut c, &layout(500.0));
    assert_eq!(c.segments()[0].state(), SegmentState::Complete);
    assert_eq!(c.segments()[1].state(), SegmentState::Drawing);
}

#[test]
fn missing_section_box_skips_update() {
    let mut c = controller();
    let l = StaticLayout::new(ScrollMetrics {
        scroll_top: 0.0,
        viewport_height: 800.0,
        document_height: 4000.0,
    });
    let out = run(&mut c, &l);
    assert!(out.is_empty());
    assert_eq!(c.segments()[0].state(), SegmentState::Dotted);
}

#[test]
fn complete_draws_everything() {
    let mut c = controller();
    let mut out = StyleBatch::new();
    c.complete(&mut out);
    assert_eq!(out.last_number(&ElementId::new("map"), props::SECTION_PROGRESS), Some(1.0));
    for seg in c.segments() {
        assert_eq!(seg.state(), SegmentState::Complete);
        assert_eq!(out.last_number(seg.id(), props::OPACITY), Some(1.0));
        assert_eq!(out.last_number(seg.id(), props::STROKE_DASHOFFSET), Some(0.0));
    }
}

fn class_writes(out: &StyleBatch) -> Vec<(String, bool)> {
    out.writes()
        .iter()
        .filter_map(|w| match w {
            StyleWrite::Class { class, enabled, .. } => Some((class.clone(), *enabled)),
            StyleWrite::Property { .. } => None,
        })
        .collect()
}

#[test]
fn visibility_class_follows_visible_ratio() {
    let mut c = controller().with_visibility(VisibilityToggle::new("animate", 0.35));

    // A quarter of the section is on screen.
    let out = run(&mut c, &layout(300.0));
    assert_eq!(class_writes(&out), vec![("animate".to_owned(), false)]);

    let out = run(&mut c, &layout(600.0));
    assert_eq!(class_writes(&out), vec![("animate".to_owned(), true)]);

    // Unchanged state writes nothing.
    let out = run(&mut c, &layout(550.0));
    assert!(class_writes(&out).is_empty());
}
