//! End-to-end flows through the facade: raw events in, offsets out.

use metro_touch::prelude::*;
use metro_touch::{GestureKind, Point, ScrollPhase, FRAME_MS};

fn settle(scroller: &mut TouchScroller) -> usize {
    let mut frames = 0;
    while scroller.step_frame().running {
        frames += 1;
        assert!(frames < 1000, "scroller never came to rest");
    }
    frames
}

#[test]
fn touch_drag_round_trip_resolves_horizontal_drag() {
    let down = RawPointerEvent::touch([Point::new(100.0, 200.0)], [Point::new(100.0, 200.0)]);
    let moved = RawPointerEvent::touch([Point::new(150.0, 210.0)], [Point::new(150.0, 210.0)]);
    // The lifted finger only shows up in the changed list.
    let up = RawPointerEvent::touch(std::iter::empty(), [Point::new(150.0, 210.0)]);

    let start = PointerSample::from_event(&down, 0.0);
    let gesture = GestureState::from_sample(start)
        .update(
            normalize_pointer_event(&moved).x,
            normalize_pointer_event(&moved).y,
            FRAME_MS * 3.0,
        );
    let lift = PointerSample::from_event(&up, FRAME_MS * 4.0);
    let result = gesture.update(lift.x, lift.y, lift.time).resolve();

    assert_eq!(result.kind, GestureKind::DragX);
    assert_eq!(result.dx, 50.0);
    assert_eq!(result.dy, 10.0);
    assert!(result.velocity_x > 0.0);
}

#[test]
fn vertical_list_flings_and_bounces_off_the_end() {
    let mut scroller = TouchScroller::with_defaults(Axis::Vertical, -600.0, 0.0)
        .expect("valid bounds");

    scroller.pointer_down(PointerSample::new(200.0, 800.0, 0.0));
    for i in 1..=6 {
        let y = 800.0 - 40.0 * i as f32;
        let offset = scroller.pointer_move(PointerSample::new(200.0, y, 16.0 * i as f64));
        assert_eq!(offset, -40.0 * i as f32);
    }
    let result = scroller
        .pointer_up(PointerSample::new(200.0, 560.0, 96.0))
        .expect("drag in progress");
    assert_eq!(result.kind, GestureKind::DragY);
    assert_eq!(scroller.phase(), ScrollPhase::Flinging);

    let mut deepest = scroller.offset();
    let mut frames = 0;
    loop {
        let outcome = scroller.step_frame();
        deepest = deepest.min(outcome.offset);
        frames += 1;
        if !outcome.running {
            break;
        }
        assert!(frames < 1000, "scroller never came to rest");
    }

    assert!(deepest < -600.0, "fling should overshoot the end");
    assert_eq!(scroller.offset(), -600.0);
    assert_eq!(scroller.phase(), ScrollPhase::Idle);
}

#[test]
fn panorama_pages_one_section_per_flick() {
    const SECTION: f32 = 400.0;
    const SECTIONS: usize = 5;
    let config = TouchPhysicsConfig::metro();
    let mut scroller = TouchScroller::new(
        Axis::Horizontal,
        snap_offset(SECTIONS - 1, SECTION),
        0.0,
        config,
    )
    .expect("valid bounds");

    let mut page = 0;
    for _ in 0..SECTIONS + 2 {
        scroller.pointer_down(PointerSample::new(300.0, 100.0, 0.0));
        for i in 1..=4 {
            scroller.pointer_move(PointerSample::new(
                300.0 - 30.0 * i as f32,
                100.0,
                16.0 * i as f64,
            ));
        }
        let result = scroller
            .pointer_up(PointerSample::new(180.0, 100.0, 64.0))
            .expect("drag in progress");

        let next = snap_page(
            page,
            scroller.offset(),
            result.velocity_x,
            SECTION,
            SECTIONS,
            &config.inertia,
        );
        assert!(next == page + 1 || (page == SECTIONS - 1 && next == page));
        page = next;

        scroller.animate_to(snap_offset(page, SECTION));
        settle(&mut scroller);
        assert_eq!(scroller.offset(), snap_offset(page, SECTION));
    }
    assert_eq!(page, SECTIONS - 1);
}

#[test]
fn independent_surfaces_do_not_share_state() {
    let mut rows = TouchScroller::with_defaults(Axis::Vertical, -1000.0, 0.0).expect("valid");
    let mut tiles = TouchScroller::with_defaults(Axis::Horizontal, -1000.0, 0.0).expect("valid");

    rows.pointer_down(PointerSample::new(0.0, 0.0, 0.0));
    tiles.pointer_down(PointerSample::new(0.0, 0.0, 0.0));
    rows.pointer_move(PointerSample::new(0.0, -50.0, 16.0));
    tiles.pointer_move(PointerSample::new(-80.0, 0.0, 16.0));

    assert_eq!(rows.offset(), -50.0);
    assert_eq!(tiles.offset(), -80.0);

    tiles.cancel();
    assert_eq!(rows.phase(), ScrollPhase::Dragging);
    assert_eq!(tiles.phase(), ScrollPhase::Idle);
}
