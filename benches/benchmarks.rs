criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_back_strength,
        evaluating_front_strength,
        exhausting_back_candidates,
        building_front_ladder,
        solving_thirteen_cards,
        solving_fourteen_cards,
        solving_seventeen_cards,
}

fn deal(n: usize) -> Vec<Card> {
    Deck::new().deal(n, &mut SmallRng::seed_from_u64(n as u64))
}

fn evaluating_back_strength(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 5-card Hand", |b| {
        let hand = Hand::from(deal(5));
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn evaluating_front_strength(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 3-card Hand", |b| {
        let hand = Hand::from(deal(3));
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn exhausting_back_candidates(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 5-subsets of 17 Slots", |b| {
        b.iter(|| Combinations::from((5, Slots::all(17))).count())
    });
}

fn building_front_ladder(c: &mut criterion::Criterion) {
    let cards = deal(17);
    c.bench_function("build a Ladder over 7 residual cards", |b| {
        b.iter(|| Ladder::from((Slots::all(7), cards.as_slice())))
    });
}

fn solving_thirteen_cards(c: &mut criterion::Criterion) {
    let cards = deal(13);
    c.bench_function("solve a 13-card Fantasyland", |b| {
        b.iter(|| solve(&cards))
    });
}

fn solving_fourteen_cards(c: &mut criterion::Criterion) {
    let cards = deal(14);
    c.bench_function("solve a 14-card Fantasyland", |b| {
        b.iter(|| solve(&cards))
    });
}

fn solving_seventeen_cards(c: &mut criterion::Criterion) {
    let cards = deal(17);
    c.bench_function("solve a 17-card Fantasyland", |b| {
        b.iter(|| solve(&cards))
    });
}

use fantasyland::cards::*;
use fantasyland::search::*;
use fantasyland::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
