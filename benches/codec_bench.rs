use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphoneinput::{compose, PHONE_NUMBER_NORMALIZER};

// (canonical value, preferred country)
type TestEntity = (&'static str, Option<&'static str>);

/// A mix of unique, shared and extended dial codes.
fn setup_decompose_data() -> Vec<TestEntity> {
    vec![
        // United Kingdom, unique dial code
        ("+447911123456", None),
        // shared "1", settled by the hint
        ("+16502530000", Some("US")),
        // shared "1", settled by registry order
        ("+16502530000", None),
        // Anguilla, extended dial code
        ("+12642351234", Some("US")),
        // shared "7"
        ("+79123456789", Some("RU")),
        // with separators
        ("+41 44 668 1800", None),
    ]
}

fn codec_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let values = setup_decompose_data();

    // warm up the digit limit cache
    for (value, preferred) in &values {
        let _ = PHONE_NUMBER_NORMALIZER.decompose(value, *preferred);
    }

    let mut group = c.benchmark_group("E.164 codec");

    group.bench_function("decompose()", |b| {
        b.iter(|| {
            for (value, preferred) in &values {
                let _ = PHONE_NUMBER_NORMALIZER.decompose(black_box(value), black_box(*preferred));
            }
        })
    });

    group.bench_function("compose()", |b| {
        b.iter(|| compose(black_box("44"), black_box("7911123456")))
    });

    group.finish();
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
