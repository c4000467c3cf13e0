use super::*;
use trellis_core::{ContainerView, LayoutDirection, MemoryViewHost, ReuseId, ViewHost};
use trellis_ui_graphics::{Point, Rect, Size};
use trellis_ui_layout::{
    Alignment, LayoutArrangement, LayoutNode, SizeLayout, SizeSpec, StackLayout, StackSpec,
    ViewConfig,
};

fn keyed_box(reuse_id: &str, size: f32) -> LayoutNode {
    SizeLayout::new(
        SizeSpec::fixed(Size::new(size, size))
            .alignment(Alignment::FILL)
            .view(ViewConfig::container().with_reuse_id(reuse_id)),
    )
    .into()
}

fn nested(outer: &str, inner: &str) -> LayoutArrangement {
    let node: LayoutNode = SizeLayout::wrapping(
        SizeSpec::new()
            .alignment(Alignment::FILL)
            .view(ViewConfig::container().with_reuse_id(outer)),
        keyed_box(inner, 10.0),
    )
    .into();
    node.arrangement_at(Point::ZERO, None, None)
}

fn column(reuse_ids: &[&str]) -> LayoutArrangement {
    let children = reuse_ids.iter().map(|id| keyed_box(id, 10.0)).collect();
    let stack: LayoutNode = StackLayout::new(StackSpec::vertical().spacing(5.0), children).into();
    stack.arrangement_at(Point::ZERO, None, None)
}

#[test]
fn prepare_materializes_the_start_state() {
    let mut host = MemoryViewHost::new();
    let container = host.create(Box::new(ContainerView));
    let from = column(&["a", "b"]);
    let to = column(&["b", "a"]);

    let animation =
        Animation::prepare(&from, &to, &mut host, container, LayoutDirection::LeftToRight)
            .unwrap();
    assert_eq!(animation.container(), container);
    let children = host.children(container).unwrap();
    assert_eq!(host.frame(children[0]).unwrap(), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(host.frame(children[1]).unwrap(), Rect::new(0.0, 15.0, 10.0, 10.0));
}

#[test]
fn apply_moves_the_same_views() {
    let mut host = MemoryViewHost::new();
    let container = host.create(Box::new(ContainerView));
    let from = column(&["a", "b"]);
    let to = column(&["b", "a"]);

    let animation =
        Animation::prepare(&from, &to, &mut host, container, LayoutDirection::LeftToRight)
            .unwrap();
    let start = host.children(container).unwrap();

    let root = animation.apply(&mut host).unwrap();
    assert_eq!(root, container);
    let end = host.children(container).unwrap();
    assert_eq!(end, vec![start[1], start[0]]);
    assert_eq!(host.frame(start[0]).unwrap(), Rect::new(0.0, 15.0, 10.0, 10.0));
    assert_eq!(host.frame(start[1]).unwrap(), Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn transitions_pair_views_present_in_both_states() {
    let mut host = MemoryViewHost::new();
    let container = host.create(Box::new(ContainerView));
    let from = column(&["a", "b", "gone"]);
    let to = column(&["new", "b", "a"]);

    let animation =
        Animation::prepare(&from, &to, &mut host, container, LayoutDirection::LeftToRight)
            .unwrap();
    let transitions = animation.transitions();
    assert_eq!(
        transitions,
        vec![
            Transition {
                reuse_id: ReuseId::from("b"),
                from: Rect::new(0.0, 15.0, 10.0, 10.0),
                to: Rect::new(0.0, 15.0, 10.0, 10.0),
            },
            Transition {
                reuse_id: ReuseId::from("a"),
                from: Rect::new(0.0, 0.0, 10.0, 10.0),
                to: Rect::new(0.0, 30.0, 10.0, 10.0),
            },
        ]
    );
}

#[test]
fn apply_reparents_views_that_swap_nesting() {
    let mut host = MemoryViewHost::new();
    let container = host.create(Box::new(ContainerView));
    let from = nested("outer", "inner");
    let to = nested("inner", "outer");

    let animation =
        Animation::prepare(&from, &to, &mut host, container, LayoutDirection::LeftToRight)
            .unwrap();
    let outer = host.children(container).unwrap()[0];
    let inner = host.children(outer).unwrap()[0];

    animation.apply(&mut host).unwrap();
    assert_eq!(host.children(container).unwrap(), vec![inner]);
    assert_eq!(host.children(inner).unwrap(), vec![outer]);
    assert_eq!(host.parent(outer).unwrap(), Some(inner));
}
