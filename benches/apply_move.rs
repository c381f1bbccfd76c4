use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kariba::{apply, initialize_match, suggest_move, GameRng, MatchConfig};

fn full_match(c: &mut Criterion) {
    let config = MatchConfig::default();
    c.bench_function("full bot match", |b| {
        b.iter(|| {
            let mut state = initialize_match(&config, "Bench", &mut GameRng::new(black_box(9)));
            while let Some(mv) = suggest_move(&state, state.active).filter(|_| !state.is_finished()) {
                state = apply(&state, &mv).expect("bot moves are legal");
            }
            state
        })
    });
}

fn opening_move(c: &mut Criterion) {
    let state = initialize_match(&MatchConfig::default(), "Bench", &mut GameRng::new(9));
    let mv = suggest_move(&state, state.active).expect("opening hand is dealt");
    c.bench_function("apply opening move", |b| {
        b.iter(|| apply(black_box(&state), black_box(&mv)))
    });
}

criterion_group!(benches, full_match, opening_move);
criterion_main!(benches);
