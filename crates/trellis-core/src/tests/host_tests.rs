use super::*;
use trellis_ui_graphics::Rect;

fn container(host: &mut MemoryViewHost) -> ViewId {
    host.create(Box::new(ContainerView))
}

#[test]
fn add_child_appends_and_records_parent() {
    let mut host = MemoryViewHost::new();
    let root = container(&mut host);
    let a = container(&mut host);
    let b = container(&mut host);
    host.add_child(root, a).unwrap();
    host.add_child(root, b).unwrap();

    assert_eq!(host.children(root).unwrap(), vec![a, b]);
    assert_eq!(host.parent(a).unwrap(), Some(root));
}

#[test]
fn add_child_moves_view_between_parents() {
    let mut host = MemoryViewHost::new();
    let first = container(&mut host);
    let second = container(&mut host);
    let child = container(&mut host);
    host.add_child(first, child).unwrap();
    host.add_child(second, child).unwrap();

    assert!(host.children(first).unwrap().is_empty());
    assert_eq!(host.children(second).unwrap(), vec![child]);
}

#[test]
fn re_adding_child_moves_it_to_the_end() {
    let mut host = MemoryViewHost::new();
    let root = container(&mut host);
    let a = container(&mut host);
    let b = container(&mut host);
    host.add_child(root, a).unwrap();
    host.add_child(root, b).unwrap();
    host.add_child(root, a).unwrap();

    assert_eq!(host.children(root).unwrap(), vec![b, a]);
}

#[test]
fn add_child_rejects_cycles() {
    let mut host = MemoryViewHost::new();
    let root = container(&mut host);
    let child = container(&mut host);
    host.add_child(root, child).unwrap();

    assert_eq!(
        host.add_child(child, root),
        Err(ViewError::Cycle {
            parent: child,
            child: root
        })
    );
    assert_eq!(
        host.add_child(root, root),
        Err(ViewError::Cycle {
            parent: root,
            child: root
        })
    );
}

#[test]
fn dispose_drops_whole_subtree() {
    let mut host = MemoryViewHost::new();
    let root = container(&mut host);
    let middle = container(&mut host);
    let leaf = container(&mut host);
    host.add_child(root, middle).unwrap();
    host.add_child(middle, leaf).unwrap();

    host.dispose(middle).unwrap();

    assert!(host.children(root).unwrap().is_empty());
    assert!(!host.contains(middle));
    assert!(!host.contains(leaf));
    assert_eq!(host.len(), 1);
    assert_eq!(host.frame(leaf), Err(ViewError::Missing { id: leaf }));
}

#[test]
fn with_view_reports_type_mismatch() {
    let mut host = MemoryViewHost::new();
    let id = container(&mut host);
    let result = host.with_view::<LabelView, _>(id, |label| label.text.clear());
    assert!(matches!(result, Err(ViewError::TypeMismatch { .. })));
}

#[test]
fn with_view_mutates_typed_view() {
    let mut host = MemoryViewHost::new();
    let id = host.create(Box::new(LabelView::default()));
    host.with_view::<LabelView, _>(id, |label| label.text = "hello".into())
        .unwrap();
    assert_eq!(host.view::<LabelView>(id).unwrap().text, "hello");
}

#[test]
fn tags_and_frames_live_beside_the_view() {
    let mut host = MemoryViewHost::new();
    let id = container(&mut host);
    host.set_frame(id, Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    host.set_tag(id, ViewTag::new(Some("title".into()), None))
        .unwrap();

    assert_eq!(host.frame(id).unwrap(), Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(
        host.tag(id).unwrap().reuse_id,
        Some(ReuseId::from("title"))
    );
}

#[test]
fn dump_tree_prints_hierarchy() {
    let mut host = MemoryViewHost::new();
    let root = container(&mut host);
    let label = host.create(Box::new(LabelView::default()));
    host.add_child(root, label).unwrap();
    host.set_tag(label, ViewTag::new(Some("name".into()), None))
        .unwrap();

    let dump = host.dump_tree(Some(root));
    assert_eq!(
        dump,
        "[0] ContainerView (0, 0, 0 x 0)\n  [1] LabelView (0, 0, 0 x 0) #name\n"
    );
}

#[test]
fn error_messages_name_the_view() {
    assert_eq!(ViewError::Missing { id: 3 }.to_string(), "view 3 missing");
}
