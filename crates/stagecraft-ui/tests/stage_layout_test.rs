//! Layout nodes hosted on a stage: viewport tracking, drawing and the stale
//! geometry a policy produces when it forgets to invalidate.

use stagecraft_core::{add_child, Stage, StageOptions};
use stagecraft_testing::{ProbePolicy, StackPolicy};
use stagecraft_ui::{Layout, LayoutContainer, LayoutLeaf, Node};
use stagecraft_ui_graphics::{Color, DrawPrimitive, Rect, RecordingDrawScope, Size};

#[test]
fn fill_parent_under_root_follows_the_viewport() {
    let stage = Stage::new(StageOptions::default().with_viewport_size(1024.0, 768.0));
    let probe = ProbePolicy::new();
    let screen = LayoutContainer::with_policy(probe.clone());
    screen.set_fill_parent(true);
    stage.add_actor(screen.clone()).expect("screen attaches");
    stage.root().set_size(5.0, 5.0);

    screen.validate();
    assert_eq!(screen.size(), Size::new(1024.0, 768.0));

    stage.set_viewport_size(800.0, 480.0);
    screen.validate();
    assert_eq!(screen.size(), Size::new(800.0, 480.0));
    assert_eq!(
        probe.layout_sizes(),
        vec![Size::new(1024.0, 768.0), Size::new(800.0, 480.0)]
    );
}

#[test]
fn drawing_the_stage_validates_before_painting() {
    let stage = Stage::default();
    let screen = LayoutContainer::with_policy(StackPolicy::new());
    screen.set_fill_parent(true);
    screen.set_position(10.0, 20.0);
    let first = LayoutLeaf::with_policy(ProbePolicy::new().with_color(Color::RED));
    let second = LayoutLeaf::with_policy(ProbePolicy::new().with_color(Color::BLUE));
    add_child(&*screen, first.clone()).expect("first attaches");
    add_child(&*screen, second.clone()).expect("second attaches");
    stage.add_actor(screen.clone()).expect("screen attaches");

    let mut scope = RecordingDrawScope::new();
    stage.draw(&mut scope);

    assert!(!screen.needs_layout());
    assert!(!first.needs_layout());
    assert_eq!(
        scope.into_primitives(),
        vec![
            DrawPrimitive::Rect {
                rect: Rect::new(10.0, 20.0, 800.0, 600.0),
                color: Color::RED,
            },
            DrawPrimitive::Rect {
                rect: Rect::new(10.0, 20.0, 800.0, 600.0),
                color: Color::BLUE,
            },
        ]
    );
}

#[test]
fn forgotten_invalidation_leaves_geometry_stale() {
    let container = LayoutContainer::with_policy(StackPolicy::new());
    let probe = ProbePolicy::with_pref_size(100.0, 50.0);
    let leaf = LayoutLeaf::with_policy(probe.clone());
    add_child(&*container, leaf.clone()).expect("leaf attaches");
    container.pack();
    assert_eq!(leaf.size(), Size::new(100.0, 50.0));

    // the preferred size changes behind the protocol's back
    probe.set_pref_size(200.0, 80.0);
    container.validate();
    assert_eq!(leaf.size(), Size::new(100.0, 50.0));

    leaf.invalidate_hierarchy();
    container.validate();
    assert_eq!(leaf.size(), Size::new(200.0, 80.0));
}

#[test]
fn dump_shows_layout_flags() {
    let stage = Stage::default();
    let screen = LayoutContainer::new();
    screen.set_fill_parent(true);
    stage.add_actor(screen.clone()).expect("screen attaches");
    screen.validate();

    let dump = stage.dump_tree();
    let line = format!(
        "  [{}] LayoutContainer 800x600 layout(dirty=false, enabled=true, fill=true)",
        screen.id()
    );
    assert!(dump.lines().any(|candidate| candidate == line), "{dump}");
}
