//! Benchmarks for the visible-list computation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic store about the size of one city's restaurant list.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Aspect, Restaurant, RestaurantStore};
use pipeline::{orchestrate, FilterSelection, RatingRange, SortKey};

const CUISINES: [&str; 6] = ["American", "Italian", "Thai", "Mexican", "Indian", "Japanese"];
const ZONES: [&str; 4] = ["Midtown", "Chelsea", "Harlem", "Tribeca"];
const PRICES: [&str; 4] = ["$", "$$", "$$$", "$$$$"];
const ASPECTS: [&str; 5] = ["Cozy", "Good Value", "Loud", "Slow Service", "Great View"];

fn synthetic_store(size: u32) -> RestaurantStore {
    let restaurants = (0..size)
        .map(|id| {
            let i = id as usize;
            let mut r = Restaurant::new(id, format!("Restaurant {:05}", (id * 7919) % size));
            r.primary_cuisine = Some(CUISINES[i % CUISINES.len()].to_string());
            r.zone = Some(ZONES[i % ZONES.len()].to_string());
            r.price = Some(PRICES[i % PRICES.len()].to_string());
            r.overall_rating = Some((i % 50) as f32 / 10.0);
            r.food_rating = Some((i % 10) as f32 / 2.0);
            r.aspects = ASPECTS
                .iter()
                .enumerate()
                .filter(|(k, _)| (i + k) % 3 == 0)
                .map(|(_, label)| Aspect::positive(*label))
                .collect();
            r
        })
        .collect();
    RestaurantStore::from_restaurants(restaurants).expect("synthetic ids are unique")
}

fn bench_orchestrate_unfiltered(c: &mut Criterion) {
    let store = synthetic_store(5000);
    let selection = FilterSelection::new();

    c.bench_function("orchestrate_unfiltered", |b| {
        b.iter(|| black_box(orchestrate(black_box(&store), black_box(&selection))))
    });
}

fn bench_orchestrate_full_selection(c: &mut Criterion) {
    let store = synthetic_store(5000);
    let mut selection = FilterSelection::new();
    selection.zone = Some("Midtown".to_string());
    selection.rating_range = Some(RatingRange::new(2.0, 5.0));
    selection.set_aspects(["Cozy"]);
    selection.sort = Some(SortKey::Alphabetical);

    c.bench_function("orchestrate_full_selection", |b| {
        b.iter(|| black_box(orchestrate(black_box(&store), black_box(&selection))))
    });
}

fn bench_sort_by_rating(c: &mut Criterion) {
    let store = synthetic_store(5000);
    let mut selection = FilterSelection::new();
    selection.sort = Some(SortKey::Rating);

    c.bench_function("orchestrate_sort_rating", |b| {
        b.iter(|| black_box(orchestrate(black_box(&store), black_box(&selection))))
    });
}

criterion_group!(
    benches,
    bench_orchestrate_unfiltered,
    bench_orchestrate_full_selection,
    bench_sort_by_rating
);
criterion_main!(benches);
