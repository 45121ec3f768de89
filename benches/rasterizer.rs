use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastclip::bench::{
    BresenhamCircleRasterizer, BresenhamLineRasterizer, CircleRasterizer, ClipBox, ConvexPolygon,
    CyrusBeckClipper, DdaRasterizer, FrameBuffer, LiangBarskyClipper, LineClipper,
    LineRasterizer, Point, Segment, StepByStepRasterizer,
};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;
const COLOR: u32 = 0xFFFF0000;

fn create_buffer() -> Vec<u32> {
    vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize]
}

fn short_line() -> (Point, Point) {
    (Point::new(100.0, 100.0), Point::new(120.0, 108.0))
}

fn long_line() -> (Point, Point) {
    (Point::new(10.0, 20.0), Point::new(790.0, 410.0))
}

fn steep_line() -> (Point, Point) {
    (Point::new(400.0, 5.0), Point::new(460.0, 595.0))
}

fn draw<R: LineRasterizer>(rasterizer: &R, line: &(Point, Point), fb: &mut FrameBuffer) {
    rasterizer
        .draw_line(black_box(line.0), black_box(line.1), COLOR, fb, None)
        .unwrap();
}

fn benchmark_single_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_line");

    let step_by_step = StepByStepRasterizer::new();
    let dda = DdaRasterizer::new();
    let bresenham = BresenhamLineRasterizer::new();

    for (name, line) in [
        ("short", short_line()),
        ("long", long_line()),
        ("steep", steep_line()),
    ] {
        group.bench_with_input(BenchmarkId::new("step_by_step", name), &line, |b, line| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                draw(&step_by_step, line, &mut fb);
            });
        });

        group.bench_with_input(BenchmarkId::new("dda", name), &line, |b, line| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                draw(&dda, line, &mut fb);
            });
        });

        group.bench_with_input(BenchmarkId::new("bresenham", name), &line, |b, line| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                draw(&bresenham, line, &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    let bresenham = BresenhamCircleRasterizer::new();
    let center = Point::new(400.0, 300.0);

    for (name, radius) in [("small", 10.0), ("large", 280.0)] {
        group.bench_with_input(BenchmarkId::new("bresenham", name), &radius, |b, &r| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                bresenham
                    .draw_circle(black_box(center), black_box(r), COLOR, &mut fb, None)
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_clipping(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_400_segments");

    // Fan of segments through and around the region
    let segments: Vec<Segment> = (0..400)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 400.0;
            let offset = (i % 7) as f64 * 10.0 - 30.0;
            Segment::new(
                Point::new(offset - 150.0 * angle.cos(), offset - 150.0 * angle.sin()),
                Point::new(offset + 150.0 * angle.cos(), offset + 150.0 * angle.sin()),
            )
        })
        .collect();

    let clip_box = ClipBox::new(-50.0, -40.0, 60.0, 45.0).unwrap();
    let polygon = clip_box.to_polygon().unwrap();
    let octagon = ConvexPolygon::new(
        (0..8)
            .map(|k| {
                let angle = k as f64 * std::f64::consts::TAU / 8.0;
                Point::new(60.0 * angle.cos(), 60.0 * angle.sin())
            })
            .collect(),
    )
    .unwrap();

    let liang_barsky = LiangBarskyClipper::new();
    let cyrus_beck = CyrusBeckClipper::new();

    group.bench_function("liang_barsky_box", |b| {
        b.iter(|| {
            for &segment in &segments {
                black_box(liang_barsky.clip(black_box(segment), &clip_box, None).unwrap());
            }
        });
    });

    group.bench_function("cyrus_beck_box", |b| {
        b.iter(|| {
            for &segment in &segments {
                black_box(cyrus_beck.clip(black_box(segment), &polygon, None).unwrap());
            }
        });
    });

    group.bench_function("cyrus_beck_octagon", |b| {
        b.iter(|| {
            for &segment in &segments {
                black_box(cyrus_beck.clip(black_box(segment), &octagon, None).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_line,
    benchmark_circles,
    benchmark_clipping
);
criterion_main!(benches);
