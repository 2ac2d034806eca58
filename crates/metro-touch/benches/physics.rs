use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metro_touch::{
    calculate_velocity, Axis, AxisRailState, GestureState, InertiaState, PointerSample,
    SpringState, TouchScroller,
};

const FLING_VELOCITIES: &[f32] = &[5.0, 20.0, 60.0];
const SPRING_DISPLACEMENTS: &[f32] = &[20.0, 200.0, 1000.0];
const DRAG_MOVES: usize = 60;

fn drag_samples(moves: usize) -> Vec<PointerSample> {
    (0..=moves)
        .map(|i| PointerSample::new(500.0 - 7.0 * i as f32, 0.5 * i as f32, 16.67 * i as f64))
        .collect()
}

fn bench_inertia(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertia_to_rest");
    for &velocity in FLING_VELOCITIES {
        group.bench_with_input(
            BenchmarkId::new("velocity", velocity),
            &velocity,
            |b, &velocity| {
                b.iter(|| {
                    let mut state = InertiaState::new(black_box(velocity), 0.0);
                    while state.is_moving() {
                        state = state.step();
                    }
                    state.position()
                });
            },
        );
    }
    group.finish();
}

fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_settle");
    for &displacement in SPRING_DISPLACEMENTS {
        group.bench_with_input(
            BenchmarkId::new("displacement", displacement),
            &displacement,
            |b, &displacement| {
                b.iter(|| {
                    let mut state = SpringState::at(black_box(displacement));
                    while !state.is_settled() {
                        state = state.step();
                    }
                    state.position()
                });
            },
        );
    }
    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let samples = drag_samples(DRAG_MOVES);
    c.bench_function("gesture_track_and_resolve", |b| {
        b.iter(|| {
            let mut gesture = GestureState::from_sample(samples[0]);
            let mut rail = AxisRailState::new();
            for pair in samples.windows(2) {
                gesture = gesture.update(pair[1].x, pair[1].y, pair[1].time);
                let (movement, next) = rail.feed(pair[1].x - pair[0].x, pair[1].y - pair[0].y);
                rail = next;
                black_box(movement);
            }
            black_box(gesture.resolve())
        });
    });

    c.bench_function("velocity_window", |b| {
        b.iter(|| calculate_velocity(black_box(&samples), Axis::Horizontal));
    });
}

fn bench_scroller(c: &mut Criterion) {
    let samples = drag_samples(DRAG_MOVES);
    c.bench_function("scroller_drag_fling_bounce", |b| {
        b.iter(|| {
            let Ok(mut scroller) = TouchScroller::with_defaults(Axis::Horizontal, -300.0, 0.0)
            else {
                return 0.0;
            };
            scroller.pointer_down(samples[0]);
            for &sample in &samples[1..] {
                scroller.pointer_move(sample);
            }
            scroller.pointer_up(samples[samples.len() - 1]);
            while scroller.step_frame().running {}
            scroller.offset()
        });
    });
}

criterion_group!(
    physics,
    bench_inertia,
    bench_spring,
    bench_gesture,
    bench_scroller
);
criterion_main!(physics);
