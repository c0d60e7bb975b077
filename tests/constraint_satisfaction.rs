//! Integration tests for rule resolution. The first half checks the resolved
//! constraint parameters; the second half feeds them through the solver and
//! checks that the solved frames satisfy the declared rules.

use anchor_rules::layout::{
    library, AnchorRef, Arrange, Constraint, DimensionAnchor, EdgeInsets, LayoutEngine, Priority,
    Rect, Relation, Rules, View, XAnchor, YAnchor,
};
use pretty_assertions::assert_eq;

const TOLERANCE: f64 = 0.001;

fn params(constraints: &[Constraint]) -> Vec<(AnchorRef, Option<AnchorRef>, Relation, f64, f64)> {
    constraints
        .iter()
        .map(|c| {
            (
                c.first().anchor(),
                c.second().map(|s| s.anchor()),
                c.relation(),
                c.constant(),
                c.multiplier(),
            )
        })
        .collect()
}

fn assert_frame(engine: &LayoutEngine, view: &View, expected: Rect) {
    let actual = engine.frame(view);
    assert!(
        actual.approx_eq(&expected, TOLERANCE),
        "{} frame should be {:?}, got {:?}",
        view,
        expected,
        actual
    );
}

fn engine_with_root(width: f64, height: f64) -> (LayoutEngine, View) {
    let mut engine = LayoutEngine::new();
    let root = View::new("root");
    engine
        .set_frame(&root, Rect::new(0.0, 0.0, width, height))
        .expect("root frame");
    (engine, root)
}

#[test]
fn test_inset_example_yields_four_edges() {
    let container = View::new("container");
    let child = View::new("child");

    let constraints = child.position_relative_to(&container, &library::inset(10.0));

    let described: Vec<String> = constraints.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        described,
        vec![
            "child.top == container.top + 10",
            "child.left == container.left + 10",
            "child.right == container.right - 10",
            "child.bottom == container.bottom - 10",
        ]
    );
    assert!(constraints.iter().all(|c| c.relation() == Relation::Equal));
    assert!(constraints.iter().all(|c| c.priority() == Priority::REQUIRED));
}

#[test]
fn test_resolving_twice_is_independent() {
    let a = View::new("a");
    let b = View::new("b");
    let rules = library::inset(4.0) + library::aspect_ratio(2.0) + library::constant_width(9.0);

    let first = a.position_relative_to_with(&b, &rules, Relation::GreaterOrEqual, None);
    let second = a.position_relative_to_with(&b, &rules, Relation::GreaterOrEqual, None);

    assert_eq!(params(&first), params(&second));
    for (x, y) in first.iter().zip(&second) {
        assert!(x.same_parameters(y));
        assert!(x.raw() != y.raw(), "each resolution must build a new constraint");
    }
}

#[test]
fn test_inset_equals_uniform_insets() {
    let a = View::new("a");
    let b = View::new("b");
    let uniform = a.position_relative_to(&b, &library::inset(7.0));
    let explicit = a.position_relative_to(&b, &library::inset_by(EdgeInsets::uniform(7.0)));
    assert_eq!(params(&uniform), params(&explicit));
}

#[test]
fn test_to_left_and_to_right_mirror() {
    let a = View::new("a");
    let b = View::new("b");

    let left_of = a.position_relative_to(&b, &library::to_left(12.0));
    let right_of = b.position_relative_to(&a, &library::to_right(12.0));

    assert_eq!(left_of[0].constant(), -12.0);
    assert_eq!(right_of[0].constant(), 12.0);
    assert_eq!(left_of[0].first().anchor(), AnchorRef::X(XAnchor::Right));
    assert_eq!(right_of[0].first().anchor(), AnchorRef::X(XAnchor::Left));
}

#[test]
fn test_resolution_distributes_over_concatenation() {
    let a = View::new("a");
    let b = View::new("b");
    let s1 = library::top_left(3.0, 4.0) + library::equally_sized();
    let s2 = library::below(6.0) + library::height(1.0, 0.5);

    let together = a.position_relative_to(&b, &(s1.clone() + s2.clone()));
    let mut separately = a.position_relative_to(&b, &s1);
    separately.extend(a.position_relative_to(&b, &s2));

    assert_eq!(params(&together), params(&separately));
}

#[test]
fn test_row_and_column_group_counts() {
    let one = vec![View::new("only")];
    assert!(one.row(&Rules::new(), 8.0, &Rules::new()).is_empty());
    assert!(one.column(&Rules::new(), 8.0, &Rules::new()).is_empty());

    let five: Vec<View> = (0..5).map(|i| View::new(format!("item{}", i))).collect();
    assert_eq!(five.row(&library::top(0.0), 8.0, &Rules::new()).len(), 4);
    assert_eq!(five.column(&library::left(0.0), 8.0, &Rules::new()).len(), 4);
    assert_eq!(five.equal_in(&library::equally_sized()).len(), 4);
}

#[test]
fn test_aspect_ratio_one() {
    let photo = View::new("photo");
    let constraints = photo.self_constrain(&library::aspect_ratio(1.0));

    assert_eq!(constraints.len(), 1);
    assert_eq!(
        params(&constraints),
        vec![(
            AnchorRef::Dimension(DimensionAnchor::Height),
            Some(AnchorRef::Dimension(DimensionAnchor::Width)),
            Relation::Equal,
            0.0,
            1.0,
        )]
    );
}

#[test]
fn test_solved_inset_and_corners() {
    let (mut engine, root) = engine_with_root(400.0, 300.0);
    let panel = View::new("panel");
    let badge = View::new("badge");
    let footer = View::new("footer");

    let insets = EdgeInsets::new(10.0, 20.0, 30.0, 40.0);
    let footer_size = library::constant_width(100.0) + library::constant_height(10.0);

    engine
        .activate_all([
            panel.position_relative_to(&root, &library::inset_by(insets)),
            badge.position_relative_to(&root, &library::top_right(5.0, 6.0)),
            badge.self_constrain(&(library::constant_width(50.0) + library::constant_height(20.0))),
            footer.position_relative_to(&root, &library::bottom_left(8.0, 9.0)),
            footer.self_constrain(&footer_size),
        ])
        .unwrap();

    assert_frame(&engine, &panel, Rect::new(20.0, 10.0, 340.0, 260.0));
    assert_frame(&engine, &badge, Rect::new(344.0, 5.0, 50.0, 20.0));
    assert_frame(&engine, &footer, Rect::new(9.0, 282.0, 100.0, 10.0));
}

#[test]
fn test_solved_row_layout() {
    let (mut engine, root) = engine_with_root(320.0, 100.0);
    let items: Vec<View> = (0..3).map(|i| View::new(format!("item{}", i))).collect();
    let size = library::constant_width(60.0) + library::constant_height(40.0);

    engine
        .activate_with(|batch| {
            batch.push(items[0].position_relative_to(&root, &library::top_left(10.0, 10.0)));
            batch.push(items[0].self_constrain(&size));
            batch.push_all(items.row(
                &library::center_y(0.0),
                8.0,
                &library::equally_sized(),
            ));
        })
        .unwrap();

    assert_frame(&engine, &items[0], Rect::new(10.0, 10.0, 60.0, 40.0));
    assert_frame(&engine, &items[1], Rect::new(78.0, 10.0, 60.0, 40.0));
    assert_frame(&engine, &items[2], Rect::new(146.0, 10.0, 60.0, 40.0));
}

#[test]
fn test_solved_column_layout() {
    let (mut engine, root) = engine_with_root(200.0, 400.0);
    let rows: Vec<View> = (0..3).map(|i| View::new(format!("row{}", i))).collect();
    let full_width = library::left(0.0) + library::right(0.0);
    let first_row = library::top(0.0) + full_width.clone();

    engine
        .activate_with(|batch| {
            batch.push(rows[0].position_relative_to(&root, &first_row));
            batch.push(rows[0].self_constrain(&library::constant_height(30.0)));
            batch.push_all(rows.column(&full_width, 4.0, &library::height(0.0, 1.0)));
        })
        .unwrap();

    assert_frame(&engine, &rows[0], Rect::new(0.0, 0.0, 200.0, 30.0));
    assert_frame(&engine, &rows[1], Rect::new(0.0, 34.0, 200.0, 30.0));
    assert_frame(&engine, &rows[2], Rect::new(0.0, 68.0, 200.0, 30.0));
}

#[test]
fn test_solved_above_and_to_left() {
    let (mut engine, root) = engine_with_root(300.0, 300.0);
    let anchor = View::new("anchor");
    let caption = View::new("caption");
    let icon = View::new("icon");
    let square = library::constant_width(100.0) + library::constant_height(100.0);
    let over = library::above(10.0) + library::center_x(0.0) + library::equally_sized();

    engine
        .activate_all([
            anchor.position_relative_to(&root, &library::centered()),
            anchor.self_constrain(&square),
            caption.position_relative_to(&anchor, &over),
            icon.position_relative_to(&anchor, &(library::to_left(5.0) + library::center_y(0.0))),
            icon.self_constrain(&(library::constant_width(20.0) + library::aspect_ratio(1.0))),
        ])
        .unwrap();

    assert_frame(&engine, &anchor, Rect::new(100.0, 100.0, 100.0, 100.0));
    assert_frame(&engine, &caption, Rect::new(100.0, -10.0, 100.0, 100.0));
    assert_frame(&engine, &icon, Rect::new(75.0, 140.0, 20.0, 20.0));
}

#[test]
fn test_scaled_dimensions() {
    let (mut engine, root) = engine_with_root(400.0, 200.0);
    let half = View::new("half");

    let rules =
        library::top_left(0.0, 0.0) + library::width(-10.0, 0.5) + library::height(0.0, 0.25);
    engine
        .activate(half.position_relative_to(&root, &rules))
        .unwrap();

    assert_frame(&engine, &half, Rect::new(0.0, 0.0, 190.0, 50.0));
}

#[test]
fn test_inequality_relation_keeps_minimum() {
    let (mut engine, root) = engine_with_root(100.0, 100.0);
    let label = View::new("label");

    engine
        .activate_all([
            label.position_relative_to(&root, &library::top_left(0.0, 0.0)),
            label.self_constrain_with(
                &library::constant_width(40.0),
                Relation::GreaterOrEqual,
                None,
            ),
            label.self_constrain_with(
                &(library::constant_width(10.0) + library::constant_height(10.0)),
                Relation::Equal,
                Some(Priority::LOW),
            ),
        ])
        .unwrap();

    let frame = engine.frame(&label);
    assert!((frame.width - 40.0).abs() < TOLERANCE, "width {}", frame.width);
    assert!((frame.height - 10.0).abs() < TOLERANCE, "height {}", frame.height);
}

#[test]
fn test_vertical_anchor_kinds() {
    let a = View::new("a");
    let b = View::new("b");
    let constraints = a.position_relative_to(&b, &(library::below(1.0) + library::center_y(2.0)));
    assert_eq!(
        constraints[0].second().map(|s| s.anchor()),
        Some(AnchorRef::Y(YAnchor::Bottom))
    );
    assert_eq!(constraints[1].first().anchor(), AnchorRef::Y(YAnchor::CenterY));
}
