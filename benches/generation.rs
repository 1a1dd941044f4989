use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use tempfile::TempDir;
use wordlist::generator::WordlistGenerator;
use wordlist::pipeline::{Pipeline, PipelineConfig};
use wordlist::prefix::Prefix;
use wordlist::render::LineRenderer;

/// Benchmark raw line rendering into a reused buffer
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let prefix = Prefix::parse("053").expect("valid prefix");
    let renderer = LineRenderer::new(&prefix, 10_000_000);

    let lines: u64 = 100_000;
    group.throughput(Throughput::Elements(lines));
    group.bench_function("100k_lines", |b| {
        let mut buf = Vec::with_capacity(lines as usize * renderer.line_len());
        b.iter(|| {
            buf.clear();
            for i in 0..lines {
                renderer.render_into(black_box(i), &mut buf).unwrap();
            }
            black_box(buf.len())
        });
    });

    group.finish();
}

/// Benchmark the full pipeline into a discarding sink for several worker counts
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let prefix = Prefix::parse("053").expect("valid prefix");
    let total: u64 = 1_000_000;
    group.throughput(Throughput::Elements(total));

    for workers in [1, 2, 4, 8] {
        let config = PipelineConfig::default()
            .with_total(total)
            .with_workers(workers);
        let pipeline = Pipeline::new(&prefix, config).expect("valid config");

        group.bench_with_input(BenchmarkId::from_parameter(workers), &pipeline, |b, pipeline| {
            b.iter(|| pipeline.run(io::sink()).expect("pipeline run failed").stats)
        });
    }

    group.finish();
}

/// Benchmark end-to-end generation to a file on disk
fn bench_file_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_generation");
    group.sample_size(10);

    let prefix = Prefix::parse("053").expect("valid prefix");
    let total: u64 = 1_000_000;
    group.throughput(Throughput::Elements(total));

    group.bench_function("1m_lines", |b| {
        b.iter_batched(
            || TempDir::new().unwrap(),
            |temp_dir| {
                let generator = WordlistGenerator::new(PipelineConfig::default().with_total(total));
                let report = generator
                    .generate(&prefix, temp_dir.path())
                    .expect("generation failed");
                drop(temp_dir);
                report.stats
            },
            criterion::BatchSize::PerIteration,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_pipeline, bench_file_generation);
criterion_main!(benches);
