use super::*;

#[test]
fn decreased_to_takes_component_minimum() {
    let size = Size::new(50.0, 10.0).decreased_to(Size::new(30.0, 100.0));
    assert_eq!(size, Size::new(30.0, 10.0));
}

#[test]
fn increased_to_takes_component_maximum() {
    let size = Size::new(5.0, 40.0).increased_to(Size::new(12.0, 3.0));
    assert_eq!(size, Size::new(12.0, 40.0));
}

#[test]
fn insets_round_trip_through_size() {
    let insets = EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0);
    let reduced = Size::new(100.0, 50.0).decreased_by_insets(insets);
    assert_eq!(reduced, Size::new(96.0, 44.0));
    assert_eq!(reduced.increased_by_insets(insets), Size::new(100.0, 50.0));
}

#[test]
fn infinite_budget_survives_inset_reduction() {
    let reduced = Size::INFINITE.decreased_by_insets(EdgeInsets::uniform(8.0));
    assert!(reduced.width.is_infinite());
    assert!(reduced.height.is_infinite());
}

#[test]
fn inset_by_moves_origin_and_shrinks() {
    let rect = Rect::new(0.0, 0.0, 150.0, 50.0).inset_by(EdgeInsets::uniform(8.0));
    assert_eq!(rect, Rect::new(8.0, 8.0, 134.0, 34.0));
}

#[test]
fn rect_edges_and_offset() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.max_x(), 40.0);
    assert_eq!(rect.max_y(), 60.0);
    assert_eq!(
        rect.offset_by(Point::new(-10.0, 5.0)),
        Rect::new(0.0, 25.0, 30.0, 40.0)
    );
    assert_eq!(rect.to_string(), "(10, 20, 30 x 40)");
}

#[test]
fn only_wrapping_modes_wrap() {
    assert!(LineBreakMode::WordWrap.wraps());
    assert!(LineBreakMode::CharWrap.wraps());
    assert!(!LineBreakMode::TruncateTail.wraps());
    assert!(!LineBreakMode::Clip.wraps());
}
