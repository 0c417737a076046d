use super::*;

const PAGE: &str = r#"{
    "viewport": { "height": 800 },
    "document": { "height": 4000 },
    "sections": [
        { "id": "hero", "top": 0, "height": 900, "kind": "hero" },
        {
            "id": "map", "top": 1000, "height": 600, "kind": "illustration",
            "paths": [
                { "id": "road", "d": "M0 0 L100 0", "start": "0.2", "end": 0.8 },
                { "id": "river", "length": 250 }
            ]
        },
        {
            "id": "scene", "top": 1800, "height": 1200, "kind": "vehicle",
            "body": "car", "wheels": ["wf", "wr"],
            "legs": [
                { "start": 0, "end": 0.4, "from": [-300, 0], "to": { "x": 0, "y": 0 } }
            ],
            "visibility_class": {}
        }
    ]
}"#;

#[test]
fn parses_with_defaults() {
    let page = PageDef::from_json_str(PAGE).unwrap();
    page.validate().unwrap();

    assert_eq!(page.scroll_top, 0.0);
    assert_eq!(page.options, EngineOptions::default());
    assert_eq!(page.sections.len(), 3);

    let SectionKindDef::Hero(hero) = &page.sections[0].kind else {
        panic!("expected hero");
    };
    assert_eq!(hero.leading_lane, SubRange::new(0.08, 0.85));

    let SectionKindDef::Illustration { paths } = &page.sections[1].kind else {
        panic!("expected illustration");
    };
    assert_eq!(paths[0].start.as_deref(), Some("0.2"));
    assert_eq!(paths[0].end.as_deref(), Some("0.8"));
    assert_eq!(paths[1].start, None);

    let SectionKindDef::Vehicle(v) = &page.sections[2].kind else {
        panic!("expected vehicle");
    };
    assert_eq!(v.wheel_max_deg, 900.0);
    assert_eq!(v.legs[0].from, Vec2Def { x: -300.0, y: 0.0 });
    assert_eq!(v.legs[0].to, Vec2Def { x: 0.0, y: 0.0 });
    let vis = page.sections[2].visibility_class.as_ref().unwrap();
    assert_eq!(vis.class, "animate");
    assert_eq!(vis.threshold, 0.35);
}

fn minimal(sections: &str) -> PageDef {
    PageDef::from_json_str(&format!(
        r#"{{ "viewport": {{ "height": 800 }}, "document": {{ "height": 2000 }}, "sections": {sections} }}"#
    ))
    .unwrap()
}

#[test]
fn rejects_duplicate_ids() {
    let page = minimal(
        r#"[
            { "id": "a", "top": 0, "height": 10, "kind": "info" },
            { "id": "b", "top": 0, "height": 10, "kind": "illustration",
              "paths": [ { "id": "a", "length": 3 } ] }
        ]"#,
    );
    let err = page.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate element id 'a'"));
}

#[test]
fn rejects_path_without_geometry() {
    let page = minimal(
        r#"[ { "id": "b", "top": 0, "height": 10, "kind": "illustration",
               "paths": [ { "id": "p" } ] } ]"#,
    );
    assert!(page.validate().is_err());
}

#[test]
fn rejects_overlapping_legs() {
    let page = minimal(
        r#"[ { "id": "s", "top": 0, "height": 10, "kind": "vehicle", "body": "car",
               "legs": [
                 { "start": 0, "end": 0.5, "from": [0, 0], "to": [1, 0] },
                 { "start": 0.4, "end": 0.9, "from": [1, 0], "to": [2, 0] }
               ] } ]"#,
    );
    assert!(page.validate().unwrap_err().to_string().contains("overlap"));
}

#[test]
fn rejects_inverted_or_non_finite_legs() {
    let mut page = minimal(
        r#"[ { "id": "s", "top": 0, "height": 10, "kind": "vehicle", "body": "car",
               "legs": [ { "start": 0.6, "end": 0.2, "from": [0, 0], "to": [1, 0] } ] } ]"#,
    );
    assert!(page.validate().unwrap_err().to_string().contains("end >= start"));

    let SectionKindDef::Vehicle(v) = &mut page.sections[0].kind else {
        panic!("expected a vehicle section");
    };
    v.legs[0].start = f64::NAN;
    v.legs[0].end = 0.5;
    assert!(matches!(page.validate(), Err(RevealError::Validation(_))));
}

#[test]
fn rejects_visibility_threshold_out_of_range() {
    let page = minimal(
        r#"[ { "id": "s", "top": 0, "height": 10, "kind": "info",
               "visibility_class": { "threshold": 1.5 } } ]"#,
    );
    assert!(page.validate().unwrap_err().to_string().contains("threshold"));
}

#[test]
fn rejects_bad_viewport() {
    let mut page = minimal("[]");
    page.viewport.height = 0.0;
    assert!(page.validate().is_err());
}

#[test]
fn unknown_kind_is_a_serde_error() {
    let err = PageDef::from_json_str(
        r#"{ "viewport": { "height": 800 }, "document": { "height": 2000 },
             "sections": [ { "id": "x", "top": 0, "height": 1, "kind": "carousel" } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)));
}
