//! Integration tests for layout documents: parse, build and solve

use std::path::Path;

use anchor_rules::{
    solve, solve_with_config, DocumentError, Error, LayoutConfig, LayoutDocument, Rect,
};
use pretty_assertions::assert_eq;

const TOLERANCE: f64 = 0.001;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("fixture should exist")
}

#[test]
fn test_profile_screen_frames() {
    let layout = solve(&fixture("profile.toml")).expect("layout should succeed");

    let expected = [
        ("screen", Rect::new(0.0, 0.0, 320.0, 480.0)),
        ("header", Rect::new(0.0, 44.0, 320.0, 44.0)),
        ("avatar", Rect::new(120.0, 96.0, 80.0, 80.0)),
        ("follow", Rect::new(12.0, 188.0, 96.0, 32.0)),
        ("message", Rect::new(112.0, 188.0, 96.0, 32.0)),
        ("share", Rect::new(212.0, 188.0, 96.0, 32.0)),
        ("bio", Rect::new(0.0, 228.0, 320.0, 60.0)),
        ("links", Rect::new(0.0, 296.0, 320.0, 60.0)),
    ];

    let frames = layout.frames();
    let names: Vec<&str> = frames.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        expected.iter().map(|(name, _)| *name).collect::<Vec<_>>()
    );
    for (name, rect) in expected {
        let actual = layout.frame(name).unwrap();
        assert!(
            actual.approx_eq(&rect, TOLERANCE),
            "{} should be {:?}, got {:?}",
            name,
            rect,
            actual
        );
    }
}

#[test]
fn test_profile_constraint_order() {
    let layout = solve(&fixture("profile.toml")).unwrap();
    let constraints: Vec<String> = layout.constraints().iter().map(|c| c.to_string()).collect();

    assert_eq!(constraints.len(), 28);
    assert_eq!(
        &constraints[..4],
        &[
            "header.top == screen.safe_top".to_string(),
            "header.left == screen.left".to_string(),
            "header.right == screen.right".to_string(),
            "header.height == 44".to_string(),
        ]
    );
    assert_eq!(constraints[12], "bio.top == follow.bottom + 8");
    assert_eq!(constraints[14], "message.left == follow.right + 4");
    assert_eq!(constraints[constraints.len() - 1], "bio.width == header.width");
}

#[test]
fn test_config_defaults_apply() {
    let source = r#"
[root]
frame = { width = 200, height = 200 }

[[views]]
name = "a"
rules = [{ rule = "top-left" }]
self_rules = [
    { rule = "constant-width", constant = 10 },
    { rule = "constant-height", constant = 10 },
]

[[views]]
name = "b"
relative_to = "a"
rules = [{ rule = "to-right" }, { rule = "top", margin = 0 }, { rule = "equally-sized" }]
"#;

    let layout = solve_with_config(
        source,
        &LayoutConfig::new().with_margin(5.0).with_spacing(3.0),
    )
    .unwrap();

    assert!(layout
        .frame("a")
        .unwrap()
        .approx_eq(&Rect::new(5.0, 5.0, 10.0, 10.0), TOLERANCE));
    assert!(layout
        .frame("b")
        .unwrap()
        .approx_eq(&Rect::new(18.0, 5.0, 10.0, 10.0), TOLERANCE));
}

#[test]
fn test_relation_and_priority_per_view() {
    let source = r#"
[root]
frame = { width = 100, height = 100 }

[[views]]
name = "box"
rules = [{ rule = "top-left", margin = 0 }]
self_rules = [
    { rule = "constant-width", constant = 30 },
    { rule = "constant-height", constant = 30 },
]

[[views]]
name = "wish"
relation = "greater-or-equal"
priority = 250
rules = [{ rule = "top-left", margin = 0 }]
self_rules = [{ rule = "constant-width", constant = 30 }]
"#;

    let layout = solve(source).unwrap();
    let wish: Vec<String> = layout
        .constraints()
        .iter()
        .filter(|c| c.first().view() == "wish")
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        wish,
        vec![
            "wish.top >= root.top @250",
            "wish.left >= root.left @250",
            "wish.width >= 30 @250",
        ]
    );
}

#[test]
fn test_unknown_view_in_row() {
    let source = r#"
[[views]]
name = "first"

[[rows]]
views = ["first", "secnd"]
"#;
    let doc: LayoutDocument = source.parse().unwrap();
    match doc.build(&LayoutConfig::default()) {
        Err(DocumentError::UnknownView { name, .. }) => assert_eq!(name, "secnd"),
        Err(other) => panic!("expected UnknownView, got {:?}", other),
        Ok(_) => panic!("expected UnknownView, got a layout"),
    }

    let err = match solve(source) {
        Err(e) => e,
        Ok(_) => panic!("expected an error"),
    };
    assert!(matches!(err, Error::Document(DocumentError::UnknownView { .. })));
    assert!(err.to_string().contains("unknown view 'secnd'"));
}

#[test]
fn test_from_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/profile.toml");
    let doc = LayoutDocument::from_file(&path).unwrap();
    assert_eq!(doc.root.name, "screen");
    assert_eq!(doc.views.len(), 7);
    assert_eq!(doc.rows.len(), 1);
    assert_eq!(doc.equal.len(), 2);

    let missing = LayoutDocument::from_file(Path::new("does/not/exist.toml"));
    assert!(matches!(missing, Err(DocumentError::Io(_))));
}
