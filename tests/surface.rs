use scratchpad::draw::color::RED;
use scratchpad::geometry::{ClientPoint, ContainerLayout, DevicePixelRatio, Padding, ScreenRect};
use scratchpad::{DrawingSurface, PointerEvent, SurfaceOptions, Tool};
use std::cell::RefCell;
use std::rc::Rc;

fn layout(width: f64, height: f64, dpr: f64) -> ContainerLayout {
    ContainerLayout::new(
        ScreenRect::new(0.0, 0.0, width, height),
        Padding::default(),
        DevicePixelRatio::new(dpr),
    )
}

fn stroke(surface: &mut DrawingSurface, points: &[(f64, f64)]) {
    let mut points = points.iter().map(|&(x, y)| ClientPoint::new(x, y));
    if let Some(first) = points.next() {
        surface.handle_event(&PointerEvent::PointerDown(first));
    }
    for point in points {
        surface.handle_event(&PointerEvent::PointerMove(point));
    }
    surface.handle_event(&PointerEvent::PointerUp);
}

fn mounted_surface(options: SurfaceOptions) -> DrawingSurface {
    let mut surface = DrawingSurface::new(options);
    surface.mount(layout(100.0, 50.0, 2.0));
    surface
}

#[test]
fn pen_stroke_inks_physical_pixels() {
    let options = SurfaceOptions {
        pen_color: RED,
        initial_pen_width: 4.0,
        ..SurfaceOptions::default()
    };
    let mut surface = mounted_surface(options);
    stroke(&mut surface, &[(10.0, 10.0), (40.0, 10.0)]);

    let buffer = surface.canvas_mut();
    // Logical (25, 10) at 2x density.
    assert_eq!(buffer.alpha_at(50, 20), Some(255));
    assert_eq!(buffer.alpha_at(50, 60), Some(0));
    assert!(!buffer.is_blank());
    assert!(!surface.is_empty());
}

#[test]
fn eraser_punches_out_existing_ink() {
    let options = SurfaceOptions {
        initial_pen_width: 4.0,
        initial_eraser_width: 16.0,
        ..SurfaceOptions::default()
    };
    let mut surface = mounted_surface(options);
    stroke(&mut surface, &[(10.0, 10.0), (40.0, 10.0)]);

    surface.set_tool(Tool::Eraser);
    stroke(&mut surface, &[(20.0, 10.0), (30.0, 10.0)]);

    let buffer = surface.canvas_mut();
    assert_eq!(buffer.alpha_at(50, 20), Some(0));
    // Ink outside the eraser's reach survives.
    assert_eq!(buffer.alpha_at(21, 20), Some(255));
}

#[test]
fn clear_canvas_blanks_buffer_and_notifies() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let options =
        SurfaceOptions::default().with_on_draw(move |is_empty| sink.borrow_mut().push(is_empty));
    let mut surface = mounted_surface(options);

    stroke(&mut surface, &[(5.0, 5.0), (60.0, 30.0), (90.0, 5.0)]);
    surface.clear_canvas();
    assert!(surface.canvas_mut().is_blank());
    surface.clear_canvas();
    assert!(surface.canvas_mut().is_blank());

    assert!(surface.is_empty());
    assert_eq!(*events.borrow(), vec![false, true, true]);
}

#[test]
fn resize_reallocates_at_new_density() {
    let mut surface = mounted_surface(SurfaceOptions::default());
    stroke(&mut surface, &[(5.0, 5.0), (60.0, 30.0)]);

    surface.resize(layout(100.0, 50.0, 2.0));
    assert!(!surface.canvas_mut().is_blank());

    surface.resize(layout(100.0, 50.0, 3.0));
    let size = surface.canvas().size().unwrap();
    assert_eq!((size.width, size.height), (300, 150));
    assert!(surface.canvas_mut().is_blank());
    assert!(surface.is_empty());
}

#[test]
fn zero_sized_container_is_inert() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let options =
        SurfaceOptions::default().with_on_draw(move |is_empty| sink.borrow_mut().push(is_empty));
    let mut surface = DrawingSurface::new(options);
    surface.mount(layout(0.0, 0.0, 2.0));

    stroke(&mut surface, &[(1.0, 1.0), (2.0, 2.0)]);
    assert!(surface.is_empty());
    assert!(events.borrow().is_empty());
    assert!(!surface.canvas().is_allocated());

    surface.clear_canvas();
    assert_eq!(*events.borrow(), vec![true]);
}

#[test]
fn rendered_buffer_exports_png() {
    let mut surface = mounted_surface(SurfaceOptions::default());
    stroke(&mut surface, &[(10.0, 10.0), (90.0, 40.0)]);

    let mut bytes = Vec::new();
    surface.canvas().write_png(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}
