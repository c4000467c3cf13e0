use trellis_ui::prelude::*;

fn card(context: &TextContext, title: &str, body: &str) -> LayoutNode {
    let title: LayoutNode = LabelLayout::new(
        context,
        title,
        LabelSpec::new().view(ViewConfig::of::<LabelView>().with_reuse_id("title")),
    )
    .into();
    let body: LayoutNode = LabelLayout::new(context, body, LabelSpec::new()).into();
    InsetLayout::uniform(
        8.0,
        StackLayout::new(StackSpec::vertical().spacing(4.0), vec![title, body]),
    )
    .view(ViewConfig::container().with_reuse_id("card"))
    .into()
}

#[test]
fn measure_arrange_and_materialize_a_card() {
    let context = TextContext::monospaced();
    let node = card(&context, "Title", "Body text");

    let measurement = node.measurement(Size::new(200.0, f32::INFINITY));
    assert_eq!(measurement.size, Size::new(88.0, 60.0));
    let arrangement = measurement.arrangement(Rect::new(0.0, 0.0, 200.0, 60.0));

    let mut host = MemoryViewHost::new();
    let container = host.create(Box::new(ContainerView));
    arrangement
        .make_views(&mut host, Some(container), LayoutDirection::LeftToRight)
        .unwrap();

    assert_eq!(
        host.dump_tree(Some(container)),
        "[0] ContainerView (0, 0, 0 x 0)\n\
         \x20 [3] ContainerView (0, 0, 200 x 60) #card\n\
         \x20   [1] LabelView (8, 8, 40 x 20) #title\n\
         \x20   [2] LabelView (8, 32, 72 x 20)\n"
    );
}

#[test]
fn layout_runs_off_the_view_thread() {
    let context = TextContext::monospaced();
    let node = card(&context, "Title", "Body text");

    let arrangement = std::thread::spawn(move || node.arrangement_at(Point::ZERO, Some(120.0), None))
        .join()
        .unwrap();

    let mut host = MemoryViewHost::new();
    let root = arrangement
        .make_views(&mut host, None, LayoutDirection::LeftToRight)
        .unwrap();
    assert_eq!(host.frame(root).unwrap(), Rect::new(0.0, 0.0, 120.0, 60.0));
    assert_eq!(host.children(root).unwrap().len(), 2);
}

#[test]
fn reloading_with_new_content_keeps_keyed_views() {
    let context = TextContext::monospaced();
    let mut host = MemoryViewHost::new();
    let container = host.create(Box::new(ContainerView));

    let first = card(&context, "Title", "Body text").arrangement_at(Point::ZERO, Some(200.0), None);
    first
        .make_views(&mut host, Some(container), LayoutDirection::LeftToRight)
        .unwrap();
    let card_view = host.children(container).unwrap()[0];
    let title_view = host.children(card_view).unwrap()[0];

    let second =
        card(&context, "Longer title", "Body").arrangement_at(Point::ZERO, Some(200.0), None);
    second
        .make_views(&mut host, Some(container), LayoutDirection::LeftToRight)
        .unwrap();

    assert_eq!(host.children(container).unwrap(), vec![card_view]);
    let children = host.children(card_view).unwrap();
    assert_eq!(children[0], title_view);
    assert_eq!(host.view::<LabelView>(title_view).unwrap().text, "Longer title");
    assert_eq!(host.frame(title_view).unwrap(), Rect::new(8.0, 8.0, 96.0, 20.0));
    assert_eq!(host.view::<LabelView>(children[1]).unwrap().text, "Body");
    assert_eq!(host.len(), 4);
}
