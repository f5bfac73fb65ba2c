use criterion::{black_box, criterion_group, criterion_main, Criterion};
use induction_planner::data::{load_schedule, load_trains};
use induction_planner::models::{Decision, TrainRecord};
use induction_planner::planner::{rank_trains, PlannerState};
use induction_planner::schedule::build_board;

/// Repeat the bundled fleet so the benchmark is not dominated by call overhead
fn large_fleet(copies: usize) -> Vec<TrainRecord> {
    let base = load_trains();
    (0..copies)
        .flat_map(|copy| {
            base.iter().cloned().map(move |mut train| {
                train.id = format!("{}-{copy}", train.id);
                train
            })
        })
        .collect()
}

fn benchmark_ranking(c: &mut Criterion) {
    let fleet = large_fleet(40);

    c.bench_function("load_and_normalize", |b| {
        b.iter(load_trains);
    });

    c.bench_function("rank_trains", |b| {
        b.iter(|| rank_trains(black_box(&fleet)));
    });

    // What happens on every planner click
    c.bench_function("decision_then_rerank", |b| {
        let mut state = PlannerState::new(fleet.clone());
        let now = chrono::Local::now();
        b.iter(|| {
            state.update_status(black_box("7-3"), Decision::Held, now);
            state.ranked()
        });
    });

    c.bench_function("build_schedule_board", |b| {
        b.iter(|| build_board(load_schedule()));
    });
}

criterion_group!(benches, benchmark_ranking);
criterion_main!(benches);
