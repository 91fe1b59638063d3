//! Classification latency benchmarks
//!
//! Run with: cargo bench -p custdna-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use custdna_classifiers::{Classifier, InteractionClassifier};
use custdna_core::{RawInteraction, StdRandom};

fn benchmark_classifier(c: &mut Criterion) {
    let classifier = InteractionClassifier::new().expect("Failed to create classifier");
    let mut rng = StdRandom::with_seed(42);

    let test_cases = vec![
        ("trouble", RawInteraction::new("email").with_content("My order arrived broken").with_duration(40.0)),
        ("appreciation", RawInteraction::new("chat").with_content("Thanks, excellent support").with_duration(8.0)),
        ("long_call", RawInteraction::new("phone").with_content("Walked through device setup").with_duration(75.0)),
        ("all_defaults", RawInteraction::new("social")),
    ];

    let mut group = c.benchmark_group("InteractionClassifier");
    group.sample_size(100);

    for (name, raw) in test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &raw, |b, raw| {
            b.iter(|| classifier.classify(black_box(raw.clone()), &mut rng).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_classifier);
criterion_main!(benches);
