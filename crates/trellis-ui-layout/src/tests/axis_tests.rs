use super::*;
use trellis_ui_graphics::{Point, Rect, Size};

#[test]
fn axis_size_projects_per_axis() {
    let size = Size::new(3.0, 7.0);
    assert_eq!(AxisSize::new(Axis::Horizontal, size).axis_length(), 3.0);
    assert_eq!(AxisSize::new(Axis::Horizontal, size).cross_length(), 7.0);
    assert_eq!(AxisSize::new(Axis::Vertical, size).axis_length(), 7.0);
    assert_eq!(AxisSize::new(Axis::Vertical, size).cross_length(), 3.0);
}

#[test]
fn writes_round_trip_without_touching_the_other_dimension() {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let mut size = AxisSize::new(axis, Size::new(3.0, 7.0));
        let cross = size.cross_length();
        size.set_axis_length(11.0);
        assert_eq!(size.axis_length(), 11.0);
        assert_eq!(size.cross_length(), cross);

        let mut point = AxisPoint::new(axis, Point::new(1.0, 2.0));
        let axis_offset = point.axis_offset();
        point.set_cross_offset(9.0);
        assert_eq!(point.cross_offset(), 9.0);
        assert_eq!(point.axis_offset(), axis_offset);
    }
}

#[test]
fn axis_rect_builds_from_parts() {
    let origin = AxisPoint::from_offsets(Axis::Vertical, 10.0, 2.0);
    let size = AxisSize::from_lengths(Axis::Vertical, 30.0, 4.0);
    let rect = AxisRect::from_parts(Axis::Vertical, origin, size);
    assert_eq!(rect.rect, Rect::new(2.0, 10.0, 4.0, 30.0));
    assert_eq!(rect.origin().axis_offset(), 10.0);
    assert_eq!(rect.size().cross_length(), 4.0);
}

#[test]
fn axis_flexibility_projects_flexes() {
    let mut flex = AxisFlexibility::new(Axis::Vertical, Flexibility::new(Some(1), Some(2)));
    assert_eq!(flex.axis_flex(), Some(2));
    assert_eq!(flex.cross_flex(), Some(1));
    flex.set_axis_flex(None);
    assert_eq!(flex.flexibility, Flexibility::new(Some(1), None));
}

#[test]
fn cross_axis_flips() {
    assert_eq!(Axis::Horizontal.cross_axis(), Axis::Vertical);
    assert!(Axis::Vertical.cross_axis().is_horizontal());
}
