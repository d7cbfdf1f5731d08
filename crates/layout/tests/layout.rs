use orgtree_layout::{
    layout, Direction, LayoutEngine, LayoutOptions, Level, OrgChart, Person, Point, Positions,
    Relation, RelationKind, TreeLayout,
};
use std::collections::HashMap;
use test_log::test;

const WIDTH: f32 = 220.0;
const LEVEL_STEP: f32 = 100.0 + 80.0;

fn options(direction: Direction) -> LayoutOptions {
    LayoutOptions {
        direction,
        ..Default::default()
    }
}

fn reports(source: &str, target: &str) -> Relation {
    Relation::new(source, target, RelationKind::ReportsTo)
}

/// Two trees, a mentoring side link, a duplicate parent claim, a cycle and a
/// loner
fn company() -> OrgChart {
    OrgChart::new(
        vec![
            Person::new("ceo", "Ada").with_level(Level::Executive),
            Person::new("cto", "Grace").with_level(Level::Manager),
            Person::new("cfo", "Barbara").with_level(Level::Manager),
            Person::new("dev1", "Linus").with_level(Level::Member),
            Person::new("dev2", "Ken").with_level(Level::Member),
            Person::new("lead", "Margaret").with_level(Level::Lead),
            Person::new("acct", "Luca").with_level(Level::Member),
            Person::new("ops", "Olive").with_level(Level::Manager),
            Person::new("ops1", "Otto").with_level(Level::Member),
            Person::new("loop1", "Cy"),
            Person::new("loop2", "Cle"),
            Person::new("loner", "Solo").with_level("contractor"),
        ],
        vec![
            reports("ceo", "cto"),
            reports("ceo", "cfo"),
            Relation::new("cto", "lead", RelationKind::Manages),
            reports("lead", "dev1"),
            reports("lead", "dev2"),
            reports("cfo", "acct"),
            reports("cfo", "dev1"),
            Relation::new("dev1", "acct", RelationKind::Mentors),
            reports("ops", "ops1"),
            reports("loop1", "loop2"),
            reports("loop2", "loop1"),
            reports("ceo", "ghost"),
        ],
    )
}

/// Children of every person reachable from a root
fn children_of(chart: &OrgChart, engine: &TreeLayout) -> HashMap<String, Vec<String>> {
    let forest = engine.compute_forest(chart);
    let mut children = HashMap::new();
    let mut stack = forest.roots().to_vec();
    while let Some(node) = stack.pop() {
        let kids: Vec<usize> = forest.children(node).collect();
        stack.extend(&kids);
        children.insert(
            chart.person(node).id.clone(),
            kids.into_iter()
                .map(|kid| chart.person(kid).id.clone())
                .collect(),
        );
    }
    children
}

fn descendants(children: &HashMap<String, Vec<String>>, id: &str) -> Vec<String> {
    let mut all = vec![id.to_string()];
    for child in &children[id] {
        all.extend(descendants(children, child));
    }
    all
}

fn span(positions: &Positions, ids: &[String]) -> (f32, f32) {
    let xs = ids.iter().map(|id| positions[id].x);
    let min = xs.clone().fold(f32::INFINITY, f32::min);
    let max = xs.fold(f32::NEG_INFINITY, f32::max) + WIDTH;
    (min, max)
}

#[test]
fn scenario_siblings_share_a_level() {
    let chart = OrgChart::new(
        vec![
            Person::new("r", "").with_level(Level::Executive),
            Person::new("a", "").with_level(Level::Manager),
            Person::new("b", "").with_level(Level::Manager),
        ],
        vec![reports("r", "a"), reports("r", "b")],
    );
    let positions = layout(&chart, &LayoutOptions::default());

    let (r, a, b) = (positions["r"], positions["a"], positions["b"]);
    assert_eq!(a.y, b.y);
    assert_eq!(a.y - r.y, LEVEL_STEP);
    assert!(a.x < b.x);

    assert_eq!(r, Point::new(-110.0, 50.0));
    assert_eq!(a, Point::new(-250.0, 230.0));
    assert_eq!(b, Point::new(30.0, 230.0));
}

#[test]
fn scenario_self_loop_does_not_hang() {
    let chart = OrgChart::new(
        vec![Person::new("x", ""), Person::new("y", "")],
        vec![reports("x", "x")],
    );
    let positions = layout(&chart, &LayoutOptions::default());

    // Both end up in the overflow row, centered on zero
    assert_eq!(positions["x"], Point::new(-250.0, 50.0));
    assert_eq!(positions["y"], Point::new(30.0, 50.0));
}

#[test]
fn scenario_first_parent_wins() {
    let chart = OrgChart::new(
        vec![Person::new("a", ""), Person::new("b", ""), Person::new("c", "")],
        vec![reports("a", "c"), reports("b", "c")],
    );
    let engine = TreeLayout::default();
    let forest = engine.compute_forest(&chart);

    assert_eq!(forest.parent(2), Some(0));
    assert_eq!(forest.parent(1), None);
    assert_eq!(forest.children(1).count(), 0);

    let positions = engine.layout(&chart);
    assert_eq!(positions["c"].x, positions["a"].x);
    assert_eq!(positions["c"].y, positions["b"].y + LEVEL_STEP);
    assert!(positions["b"].x > positions["a"].x);
}

#[test]
fn scenario_empty_chart() {
    let positions = layout(&OrgChart::default(), &LayoutOptions::default());
    assert!(positions.is_empty());
}

#[test]
fn scenario_chain_keeps_one_column() {
    let ids = ["a", "b", "c", "d", "e"];
    let chart = OrgChart::new(
        ids.iter().map(|id| Person::new(*id, *id)).collect(),
        ids.windows(2).map(|pair| reports(pair[0], pair[1])).collect(),
    );
    let positions = layout(&chart, &LayoutOptions::default());

    for pair in ids.windows(2) {
        let (upper, lower) = (positions[pair[0]], positions[pair[1]]);
        assert_eq!(upper.x, lower.x);
        assert_eq!(lower.y - upper.y, LEVEL_STEP);
    }
    assert_eq!(positions["a"], Point::new(-110.0, 50.0));
}

#[test]
fn layout_is_deterministic() {
    let chart = company();
    for direction in [
        Direction::TopToBottom,
        Direction::BottomToTop,
        Direction::LeftToRight,
        Direction::RightToLeft,
    ] {
        let engine = TreeLayout::new(options(direction));
        let first = engine.layout(&chart);
        let second = engine.layout(&chart);
        assert_eq!(first, second);
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}

#[test]
fn every_person_is_placed_once() {
    let chart = company();
    let positions = layout(&chart, &LayoutOptions::default());

    assert_eq!(positions.len(), chart.len());
    for person in chart.people() {
        let corner = positions[&person.id];
        assert!(corner.x.is_finite() && corner.y.is_finite());
    }
    assert!(!positions.contains_key("ghost"));
}

#[test]
fn sibling_subtrees_do_not_overlap() {
    let chart = company();
    let engine = TreeLayout::default();
    let children = children_of(&chart, &engine);
    let positions = engine.layout(&chart);

    for siblings in children.values() {
        let spans: Vec<(f32, f32)> = siblings
            .iter()
            .map(|child| span(&positions, &descendants(&children, child)))
            .collect();
        for pair in spans.windows(2) {
            assert!(pair[0].1 <= pair[1].0, "{pair:?} overlap");
        }
    }
}

#[test]
fn children_sit_one_level_below_parents() {
    let chart = company();
    for direction in [Direction::TopToBottom, Direction::BottomToTop] {
        let engine = TreeLayout::new(options(direction));
        let children = children_of(&chart, &engine);
        let positions = engine.layout(&chart);

        for (parent, kids) in &children {
            for kid in kids {
                let step = positions[kid].y - positions[parent].y;
                match direction {
                    Direction::TopToBottom => assert!(step >= LEVEL_STEP),
                    _ => assert!(step <= -LEVEL_STEP),
                }
            }
        }
    }
}

#[test]
fn horizontal_layouts_grow_along_x() {
    let chart = company();
    for direction in [Direction::LeftToRight, Direction::RightToLeft] {
        let engine = TreeLayout::new(options(direction));
        let positions = engine.layout(&chart);

        let step = positions["cto"].x - positions["ceo"].x;
        match direction {
            Direction::LeftToRight => assert_eq!(step, WIDTH + 80.0),
            _ => assert_eq!(step, -(WIDTH + 80.0)),
        }
        // Siblings are stacked along y, ordered by name within a level
        assert_eq!(positions["cto"].x, positions["cfo"].x);
        assert!(positions["cfo"].y < positions["cto"].y);
    }
}

#[test]
fn equal_levels_ordered_by_name() {
    let chart = OrgChart::new(
        vec![
            Person::new("boss", "Boss").with_level(Level::Executive),
            Person::new("1", "Zed").with_level(Level::Member),
            Person::new("2", "Amy").with_level(Level::Member),
        ],
        vec![reports("boss", "1"), reports("boss", "2")],
    );

    for direction in [Direction::TopToBottom, Direction::BottomToTop] {
        let positions = layout(&chart, &options(direction));
        assert!(positions["2"].x < positions["1"].x);
    }
    for direction in [Direction::LeftToRight, Direction::RightToLeft] {
        let positions = layout(&chart, &options(direction));
        assert!(positions["2"].y < positions["1"].y);
    }
}

#[test]
fn bottom_to_top_mirrors_top_to_bottom() {
    let chart = company();
    let down = layout(&chart, &options(Direction::TopToBottom));
    let up = layout(&chart, &options(Direction::BottomToTop));

    let top = 50.0;
    let bottom = down.values().map(|p| p.y).fold(f32::MIN, f32::max) + 100.0;
    for (id, corner) in &down {
        assert_eq!(up[id].x, corner.x);
        assert_eq!(up[id].y, top + bottom - corner.y - 100.0);
    }
}

#[test]
fn layout_is_centered_below_the_margin() {
    let positions = layout(&company(), &LayoutOptions::default());

    let left = positions.values().map(|p| p.x).fold(f32::MAX, f32::min);
    let right = positions.values().map(|p| p.x).fold(f32::MIN, f32::max) + WIDTH;
    let top = positions.values().map(|p| p.y).fold(f32::MAX, f32::min);
    assert_eq!(left, -right);
    assert_eq!(top, 50.0);
}

#[test]
fn strays_go_below_the_trees() {
    let chart = company();
    let positions = layout(&chart, &LayoutOptions::default());

    let strays = ["loop1", "loop2", "loner"];
    let tree_bottom = positions
        .iter()
        .filter(|(id, _)| !strays.contains(&id.as_str()))
        .map(|(_, p)| p.y)
        .fold(f32::MIN, f32::max);

    let row = positions["loner"].y;
    assert_eq!(row, tree_bottom + LEVEL_STEP + 80.0);
    for id in strays {
        assert_eq!(positions[id].y, row);
    }
    // Unknown levels sort after everything, then by name
    assert!(positions["loop2"].x < positions["loop1"].x);
    assert!(positions["loop1"].x < positions["loner"].x);
}

#[test]
fn custom_spacing_is_respected() {
    let chart = OrgChart::new(
        vec![Person::new("r", "r"), Person::new("a", "a")],
        vec![reports("r", "a")],
    );
    let options = LayoutOptions {
        node_width: 240.0,
        node_height: 150.0,
        vertical_spacing: 100.0,
        top_margin: 0.0,
        ..Default::default()
    };
    let positions = layout(&chart, &options);

    assert_eq!(positions["r"], Point::new(-120.0, 0.0));
    assert_eq!(positions["a"], Point::new(-120.0, 250.0));
}

#[test]
fn deep_chain_does_not_overflow_the_stack() {
    let count = 5_000;
    let ids: Vec<String> = (0..count).map(|i| format!("p{i:04}")).collect();
    let chart = OrgChart::new(
        ids.iter().map(|id| Person::new(id.as_str(), "")).collect(),
        ids.windows(2)
            .map(|pair| reports(&pair[0], &pair[1]))
            .collect(),
    );

    let positions = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || layout(&chart, &LayoutOptions::default()))
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(positions.len(), count);
    assert_eq!(positions["p0000"], Point::new(-WIDTH / 2.0, 50.0));
    assert_eq!(
        positions["p4999"],
        Point::new(-WIDTH / 2.0, 50.0 + 4_999.0 * LEVEL_STEP)
    );
}
