use bezier_curve_editor::render::RenderStyle;
use bezier_curve_editor::{
    generate_curve_string, CanvasRect, CurveCoordinates, CurveEditor, EditorEvent, EditorOptions,
    HeadlessCanvas, InputTracker, RecordingContext, Renderer,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_query_points(count: usize, size: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 1000) as f32 / 1000.0 * size;
            let y = ((i * 7) % 1000) as f32 / 1000.0 * size;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing");
    let tracker = InputTracker::new(30.0);
    let curve = CurveCoordinates::default();

    for &size in &[100.0f32, 400.0f32] {
        let bounds = CanvasRect::from_size(Vec2::splat(size));
        let query_points = build_query_points(1024, size);

        group.bench_with_input(
            BenchmarkId::new("calculate_dragging_point", size as u32),
            &bounds,
            |b, bounds| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        let hit =
                            tracker.calculate_dragging_point(black_box(*point), bounds, &curve);
                        if hit.point.is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let renderer = Renderer::new(RenderStyle::from_options(&EditorOptions::default()));
    let curve = CurveCoordinates::new(0.42, 0.0, 0.58, 1.0);

    c.bench_function("draw_frame_recording", |b| {
        let mut ctx = RecordingContext::new();
        b.iter(|| {
            renderer.draw_frame(&mut ctx, black_box(Vec2::splat(400.0)), black_box(&curve));
            black_box(ctx.take().len())
        })
    });

    c.bench_function("curve_string", |b| {
        b.iter(|| black_box(generate_curve_string(black_box(&curve))))
    });
}

fn bench_drag_session(c: &mut Criterion) {
    c.bench_function("drag_session_64_moves", |b| {
        let mut editor = CurveEditor::new(HeadlessCanvas::new(800.0), None)
            .expect("Headless-Editor sollte starten");
        b.iter(|| {
            editor.handle_event(EditorEvent::PointerDown {
                client: Vec2::new(100.0, 100.0),
            });
            for step in 0..64 {
                let offset = step as f32 * 4.0;
                editor.handle_event(EditorEvent::PointerMove {
                    client: Vec2::new(100.0 + offset, 100.0 + offset),
                });
                editor.on_animation_frame();
            }
            editor.handle_event(EditorEvent::PointerUp);
            // Zurück auf Startposition, damit jede Iteration P1 trifft
            editor.handle_event(EditorEvent::PointerDown {
                client: Vec2::new(352.0, 352.0),
            });
            editor.handle_event(EditorEvent::PointerMove {
                client: Vec2::new(100.0, 100.0),
            });
            editor.handle_event(EditorEvent::PointerUp);
            black_box(editor.current_curve_coordinates().x1)
        })
    });
}

criterion_group!(core_benches, bench_hit_testing, bench_frame, bench_drag_session);
criterion_main!(core_benches);
