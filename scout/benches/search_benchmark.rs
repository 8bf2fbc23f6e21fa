use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scout::ranking::{score_record, ParsedQuery, ScoringWeights};
use scout::{synthetic, HelpCenterSearch, HelpSearchApi, SearchConfig, SearchFilters, SearchRequest, SortKey};

fn setup_store(count: usize) -> HelpCenterSearch {
    let sources = synthetic::generate(count, 42);
    HelpCenterSearch::new(&sources, SearchConfig::default()).expect("Failed to build search index")
}

fn bench_search(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let queries = vec![
        ("single_term", "commission"),
        ("multi_term", "referral payout"),
        ("phrase_miss", "xyz123nonsense"),
        ("long_query", "how to submit a referral and track the commission payout"),
    ];

    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for size in [1_000usize, 50_000] {
        let store = setup_store(size);
        for (name, query) in &queries {
            group.bench_with_input(BenchmarkId::new(*name, size), query, |b, query| {
                b.iter(|| rt.block_on(store.search(SearchRequest::new(*query))).unwrap());
            });
        }

        let filtered = SearchRequest::new("partner")
            .with_filters(SearchFilters::new().with_category("Referrals"))
            .with_sort(SortKey::Date);
        group.bench_with_input(BenchmarkId::new("filtered_date_sort", size), &filtered, |b, req| {
            b.iter(|| rt.block_on(store.search(req.clone())).unwrap());
        });
    }
    group.finish();
}

fn bench_score_record(c: &mut Criterion) {
    let store = setup_store(1_000);
    let weights = ScoringWeights::default();
    let query = ParsedQuery::parse("referral commission payout", 3).unwrap();

    c.bench_function("score_all_records", |b| {
        b.iter(|| {
            store
                .index()
                .records()
                .iter()
                .map(|r| score_record(&query, r, &weights))
                .sum::<u32>()
        });
    });
}

criterion_group!(benches, bench_search, bench_score_record);
criterion_main!(benches);
