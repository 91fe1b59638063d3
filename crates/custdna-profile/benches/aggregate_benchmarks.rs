//! Profile aggregation benchmarks
//!
//! Run with: cargo bench -p custdna-profile

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use custdna_core::{Channel, InteractionRecord, Sentiment};
use custdna_profile::{ProfileAggregator, ViewKind};

fn history(len: usize) -> Vec<InteractionRecord> {
    let channels = ["email", "phone", "chat", "social", "sms"];
    (0..len)
        .map(|i| InteractionRecord {
            date: "2026-10-01T00:00:00.000Z".to_string(),
            channel: Channel::from(channels[i % channels.len()]),
            duration: (5 + (i * 7) % 90) as f64,
            content: "benchmark".to_string(),
            sentiment: Sentiment::ALL[i % Sentiment::ALL.len()],
            escalated: i % 4 == 0,
            ai_generated: true,
            generated_at: "2026-10-01T00:00:00.000Z".to_string(),
        })
        .collect()
}

fn benchmark_aggregate(c: &mut Criterion) {
    let aggregator = ProfileAggregator::default();

    let mut group = c.benchmark_group("ProfileAggregator");
    group.sample_size(100);

    for len in [0, 10, 100, 1000] {
        let history = history(len);
        for kind in [ViewKind::Detailed, ViewKind::Compact] {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), len), &history, |b, history| {
                b.iter(|| aggregator.profile(black_box(history), kind));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
