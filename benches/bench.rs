// Criterion benchmarks for EventHub

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eventhub::core::{generate_post, EventFilter, Recommender, SortBy};
use eventhub::models::{EventRecord, Tone};
use eventhub::services::Catalog;

/// Catalog events repeated with unique ids
fn create_events(count: usize, catalog: &Catalog) -> Vec<EventRecord> {
    catalog
        .events()
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, event)| {
            let mut event = event.clone();
            event.id = i.to_string();
            event
        })
        .collect()
}

fn bench_score_event(c: &mut Criterion) {
    let catalog = Catalog::seeded();
    let recommender = Recommender::with_default_weights();
    let user = catalog.current_user();
    let event = &catalog.events()[0];

    c.bench_function("score_event", |b| {
        b.iter(|| recommender.score_event(black_box(user), black_box(event)));
    });
}

fn bench_browse(c: &mut Criterion) {
    let catalog = Catalog::seeded();
    let recommender = Recommender::with_default_weights();
    let user = catalog.current_user();
    let filter = EventFilter {
        search: "react".to_string(),
        ..EventFilter::default()
    };

    let mut group = c.benchmark_group("browse");

    for event_count in [10, 100, 1000].iter() {
        let events = create_events(*event_count, &catalog);

        group.bench_with_input(
            BenchmarkId::new("browse", event_count),
            event_count,
            |b, _| {
                b.iter(|| {
                    recommender.browse(
                        black_box(user),
                        black_box(&events),
                        black_box(&filter),
                        black_box(SortBy::Match),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_generate_post(c: &mut Criterion) {
    let catalog = Catalog::seeded();
    let event = &catalog.events()[1];

    c.bench_function("generate_post", |b| {
        b.iter(|| {
            generate_post(
                black_box(event),
                black_box("Met amazing people and learned a lot."),
                black_box(Tone::Professional),
            )
        });
    });
}

criterion_group!(benches, bench_score_event, bench_browse, bench_generate_post);

criterion_main!(benches);
