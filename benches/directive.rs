use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tiffwrite::writer::WriterOptions;

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("directive_serialize");

    let cases = vec![
        ("defaults", vec![]),
        ("jpeg", vec![("compression", "jpeg"), ("quality", "85")]),
        (
            "tiled_lzw",
            vec![
                ("compression", "lzw"),
                ("predictor", "horizontal_differencing"),
                ("layout", "tile"),
                ("tile_size", "256x256"),
            ],
        ),
        (
            "full",
            vec![
                ("compression", "deflate"),
                ("predictor", "horizontal_differencing"),
                ("layout", "tile"),
                ("tile_size", "512x512"),
                ("multi_res", "pyramid"),
                ("resolution_units", "inch"),
                ("resolution", "300x300"),
            ],
        ),
    ];

    for (label, overrides) in cases {
        let mut options = WriterOptions::default();
        options.apply(overrides).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &options, |b, options| {
            b.iter(|| black_box(options.to_directive("out.tif")));
        });
    }

    group.finish();
}

fn benchmark_bulk_apply(c: &mut Criterion) {
    let overrides = vec![
        ("compression", "deflate"),
        ("predictor", "horizontal_differencing"),
        ("resolution_units", "inch"),
        ("resolution", "300x300"),
    ];

    c.bench_function("bulk_apply", |b| {
        b.iter(|| {
            let mut options = WriterOptions::default();
            options.apply(overrides.iter().copied()).unwrap();
            black_box(options)
        })
    });
}

criterion_group!(benches, benchmark_serialize, benchmark_bulk_apply);
criterion_main!(benches);
