use super::*;
use crate::foundation::core::ElementId;
use crate::scheduler::frame::SchedulerMode;
use crate::style::batch::{PassKind, props};
use crate::style::sink::{ComputedStyles, InMemorySink};

const PAGE: &str = r#"{
    "viewport": { "height": 800 },
    "document": { "height": 3000 },
    "sections": [
        { "id": "map", "top": 1000, "height": 400, "kind": "illustration",
          "paths": [ { "id": "road", "length": 100, "start": "0.2", "end": "0.8" } ] }
    ]
}"#;

fn page(reduced_motion: bool) -> PageDef {
    let mut def = PageDef::from_json_str(PAGE).unwrap();
    def.options.reduced_motion = reduced_motion;
    def
}

fn scroll(at_ms: f64, scroll_top: f64) -> ScriptEvent {
    ScriptEvent {
        at_ms,
        event: PageEvent::Scroll { scroll_top },
    }
}

#[test]
fn burst_within_one_frame_runs_one_pass() {
    let mut sink = InMemorySink::new();
    let mut session = ScrollSession::start(&page(false), &mut sink).unwrap();
    assert_eq!(sink.passes().len(), 2);

    let script: Vec<ScriptEvent> = (0..100)
        .map(|i| scroll(i as f64 * 0.1, (i + 1) as f64 * 4.0))
        .collect();
    let stats = session.run(&script, &mut sink).unwrap();

    assert_eq!(stats.events, 100);
    assert_eq!(stats.coalesced, 99);
    assert_eq!(stats.frames_requested, 1);
    assert_eq!(stats.passes, 3);

    let (info, batch) = sink.last().unwrap();
    assert_eq!(info.kind, PassKind::Frame);
    let road = ElementId::new("road");
    let offset = batch.last_number(&road, props::STROKE_DASHOFFSET).unwrap();
    let opacity = batch.last_number(&road, props::OPACITY).unwrap();
    assert!((offset - 50.0).abs() < 1e-9, "{offset}");
    assert!((opacity - 0.625).abs() < 1e-9, "{opacity}");
}

#[test]
fn events_in_separate_intervals_get_separate_passes() {
    let mut sink = InMemorySink::new();
    let mut session = ScrollSession::start(&page(false), &mut sink).unwrap();

    let script = [scroll(40.0, 300.0), scroll(5.0, 100.0), scroll(20.0, 200.0)];
    let stats = session.run(&script, &mut sink).unwrap();

    assert_eq!(stats.frames_requested, 3);
    assert_eq!(stats.coalesced, 0);
    assert_eq!(stats.passes, 5);
    assert_eq!(session.layout().metrics().scroll_top, 300.0);
}

#[test]
fn event_on_a_boundary_lands_after_that_frame() {
    let mut sink = InMemorySink::new();
    let mut session = ScrollSession::start(&page(false), &mut sink).unwrap();

    let stats = session
        .run(&[scroll(1.0, 10.0), scroll(16.0, 20.0)], &mut sink)
        .unwrap();
    assert_eq!(stats.frames_requested, 2);
    assert_eq!(stats.passes, 4);
}

#[test]
fn resize_changes_viewport_and_requests_a_frame() {
    let mut styles = ComputedStyles::new();
    let mut session = ScrollSession::start(&page(false), &mut styles).unwrap();
    assert_eq!(
        session.dispatch(PageEvent::Resize {
            viewport_height: 1200.0
        }),
        FrameRequest::Requested
    );
    assert!(session.frame(&mut styles).unwrap());
    assert_eq!(session.layout().metrics().viewport_height, 1200.0);
    // Bottom edge at 1200: the map section has been half revealed.
    assert_eq!(
        styles.number(&ElementId::new("map"), props::SECTION_PROGRESS),
        Some(0.5)
    );
}

#[test]
fn reduced_motion_ignores_the_script() {
    let mut sink = InMemorySink::new();
    let mut session = ScrollSession::start(&page(true), &mut sink).unwrap();
    assert_eq!(session.scheduler().mode(), SchedulerMode::Static);

    let stats = session.run(&[scroll(1.0, 500.0)], &mut sink).unwrap();
    assert_eq!(stats.events, 0);
    assert_eq!(stats.passes, 2);
    assert_eq!(sink.last().unwrap().0.kind, PassKind::Complete);
}

#[test]
fn non_finite_event_time_is_rejected() {
    let mut sink = InMemorySink::new();
    let mut session = ScrollSession::start(&page(false), &mut sink).unwrap();
    let err = session.run(&[scroll(f64::NAN, 1.0)], &mut sink).unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));
}

#[test]
fn script_events_parse_with_inline_type_tag() {
    let events: Vec<ScriptEvent> = serde_json::from_str(
        r#"[ { "at_ms": 3, "type": "scroll", "scroll_top": 120 },
             { "at_ms": 9.5, "type": "resize", "viewport_height": 640 } ]"#,
    )
    .unwrap();
    assert_eq!(events[0], scroll(3.0, 120.0));
    assert_eq!(
        events[1].event,
        PageEvent::Resize {
            viewport_height: 640.0
        }
    );
}
