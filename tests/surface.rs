//! Pixel-level tests against the Cairo-backed host.

use strokepad::host::{Host, HostEvent, ImageHost, Key};
use strokepad::pad::{PadOptions, StrokePad};
use strokepad::replay;

fn attached_pad(width: f64) -> StrokePad<ImageHost> {
    StrokePad::attach(ImageHost::new("canvas-wrap", width), PadOptions::default())
}

#[test]
fn gesture_leaves_ink_and_clear_key_wipes_it() {
    let mut pad = attached_pad(320.0);
    assert!(!pad.host_mut().surface_has_ink());

    pad.handle_event(HostEvent::PointerDown { x: 10.0, y: 10.0 });
    pad.handle_event(HostEvent::PointerMove { x: 120.0, y: 80.0 });
    pad.handle_event(HostEvent::PointerUp { x: 120.0, y: 80.0 });
    assert!(pad.host_mut().surface_has_ink());

    pad.handle_event(HostEvent::KeyDown(Key::Char('c')));
    assert!(!pad.host_mut().surface_has_ink());
}

#[test]
fn press_without_motion_draws_nothing() {
    let mut pad = attached_pad(320.0);
    pad.handle_event(HostEvent::PointerDown { x: 50.0, y: 50.0 });
    pad.handle_event(HostEvent::PointerUp { x: 50.0, y: 50.0 });
    assert!(!pad.host_mut().surface_has_ink());
}

#[test]
fn resize_recreates_surface_and_discards_content() {
    let mut pad = attached_pad(320.0);
    pad.handle_event(HostEvent::PointerDown { x: 10.0, y: 10.0 });
    pad.handle_event(HostEvent::PointerMove { x: 100.0, y: 100.0 });
    pad.handle_event(HostEvent::PointerUp { x: 100.0, y: 100.0 });
    assert!(pad.host_mut().surface_has_ink());

    pad.host_mut().set_container_width(480.0);
    pad.handle_event(HostEvent::Resized);

    assert!(!pad.host_mut().surface_has_ink());
    let rect = pad.host().surface_rect().expect("surface mounted");
    assert_eq!((rect.width, rect.height), (470.0, 200.0));
}

#[test]
fn detached_host_degrades_to_drawing_nothing() {
    let mut pad = StrokePad::attach(ImageHost::detached(), PadOptions::default());
    pad.handle_event(HostEvent::PointerDown { x: 10.0, y: 10.0 });
    pad.handle_event(HostEvent::PointerMove { x: 50.0, y: 50.0 });
    pad.handle_event(HostEvent::KeyDown(Key::Char('c')));
    pad.handle_event(HostEvent::Resized);
    assert!(!pad.host_mut().surface_has_ink());
    assert!(pad.pen().is_reset());
}

#[test]
fn replayed_trace_matches_hand_dispatched_events() {
    let steps = replay::parse_trace(
        "down 10 10\nmove 20 15\nmove 30 25\nup\n# wipe everything\nkey c\n",
    )
    .unwrap();

    let mut pad = attached_pad(320.0);
    replay::run(&mut pad, &steps);

    assert!(!pad.host_mut().surface_has_ink());
    assert!(pad.pen().is_reset());

    // Same trace without the clear leaves the stroke behind.
    let steps = replay::parse_trace("down 10 10\nmove 20 15\nmove 30 25\nup\n").unwrap();
    let mut pad = attached_pad(320.0);
    replay::run(&mut pad, &steps);
    assert!(pad.host_mut().surface_has_ink());
}
