use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use string_metrics::distance;

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DamerauLevenshtein");

    for i in (2..128).step_by(4) {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(
            BenchmarkId::new("string-metrics", i),
            &(&s1, &s2),
            |b, val| {
                b.iter(|| {
                    black_box(distance::damerau_levenshtein::distance(
                        val.0.chars(),
                        val.1.chars(),
                    ));
                })
            },
        );

        let cached = distance::damerau_levenshtein::BatchComparator::new(s1.chars());
        group.bench_with_input(
            BenchmarkId::new("string-metrics (BatchComparator)", i),
            &(&cached, &s2),
            |b, val| {
                b.iter(|| {
                    black_box(val.0.distance(val.1.chars()));
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("strsim", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(strsim::damerau_levenshtein(val.0, val.1));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
