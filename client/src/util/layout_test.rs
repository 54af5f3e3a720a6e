use super::*;
use canvas::camera::Point;

fn sample_box() -> BoxObject {
    BoxObject {
        id: "a".to_owned(),
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 150.0,
        background_color: "#3b3f46".to_owned(),
        text: String::new(),
    }
}

#[test]
fn world_layer_carries_transform_and_extent() {
    let camera = Camera { pan_x: 10.0, pan_y: -5.0, zoom: 2.0 };
    let style = world_layer_style(&camera, Extent { width: 700.0, height: 400.0 });
    assert_eq!(style, "transform: translate(10px, -5px) scale(2); width: 700px; height: 400px;");
}

#[test]
fn box_style_positions_in_world_units() {
    let style = box_style(&sample_box());
    assert_eq!(style, "left: 100px; top: 50px; width: 200px; height: 150px; background-color: #3b3f46;");
}

#[test]
fn connection_delete_sits_on_midpoint() {
    let line = ConnectionLine::between(Point::new(0.0, 0.0), Point::new(100.0, 40.0));
    assert_eq!(connection_delete_style(&line), "left: 40px; top: 10px; width: 20px; height: 20px;");
}

#[test]
fn color_popover_below_settings_icon() {
    // right 300 - inset 2; top 50 + 26 + 20 + 4
    assert_eq!(color_popover_style(&sample_box()), "left: 298px; top: 100px;");
}

#[test]
fn zoom_label_rounds_to_percent() {
    assert_eq!(zoom_label(1.0), "100%");
    assert_eq!(zoom_label(1.1), "110%");
    assert_eq!(zoom_label(0.729), "73%");
}
