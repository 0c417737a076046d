use super::*;
use crate::style::batch::{PassKind, props};

fn pass(index: u64) -> PassInfo {
    PassInfo {
        index,
        kind: PassKind::Frame,
        global_progress: 0.5,
    }
}

#[test]
fn computed_styles_keep_latest_value_and_classes() {
    let scene = ElementId::new("scene");
    let mut a = StyleBatch::new();
    a.set_number(&scene, props::SECTION_PROGRESS, 0.2);
    a.set_class(&scene, "animate", true);
    let mut b = StyleBatch::new();
    b.set_number(&scene, props::SECTION_PROGRESS, 0.9);

    let mut styles = ComputedStyles::new();
    styles.apply(&pass(0), &a).unwrap();
    styles.apply(&pass(1), &b).unwrap();

    assert_eq!(styles.number(&scene, props::SECTION_PROGRESS), Some(0.9));
    assert!(styles.has_class(&scene, "animate"));

    let mut c = StyleBatch::new();
    c.set_class(&scene, "animate", false);
    styles.fold(&c);
    assert!(!styles.has_class(&scene, "animate"));
}

#[test]
fn in_memory_sink_records_every_pass() {
    let mut sink = InMemorySink::new();
    let batch = StyleBatch::new();
    sink.apply(&pass(0), &batch).unwrap();
    sink.apply(&pass(1), &batch).unwrap();
    assert_eq!(sink.passes().len(), 2);
    assert_eq!(sink.last().unwrap().0.index, 1);
}

#[test]
fn json_lines_sink_writes_one_line_per_pass() {
    let mut batch = StyleBatch::new();
    batch.set_number(&ElementId::root(), props::GLOBAL_PROGRESS, 0.5);

    let mut sink = JsonLinesSink::new(Vec::new());
    sink.apply(&pass(0), &batch).unwrap();
    sink.apply(&pass(1), &StyleBatch::new()).unwrap();
    assert_eq!(sink.lines_written(), 2);

    let bytes = sink.finish().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["pass"]["kind"], "frame");
    assert_eq!(first["writes"][0]["target"], ":root");
}
