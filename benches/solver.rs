use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use sudoku_solver::puzzles::{EXAMPLE_NINE, EXAMPLE_SIXTEEN, EXAMPLE_TWENTY_FIVE, HARD_NINE};
use sudoku_solver::solver::board::Board;
use sudoku_solver::solver::engine::Search;
use sudoku_solver::solver::parse;
use sudoku_solver::solver::queue::{BucketQueue, CellQueue, OrderedQueue};

fn solve_with<Q: CellQueue>(board: &Board) {
    let mut search: Search<Q> = Search::new(board.clone()).unwrap();
    black_box(search.solve().unwrap());
}

fn bench_classic_nine(c: &mut Criterion) {
    let board = parse::parse(EXAMPLE_NINE).unwrap();

    let mut group = c.benchmark_group("classic 9x9 - queue");
    group.sample_size(100);

    group.bench_function("Bucket", |b| {
        b.iter(|| solve_with::<BucketQueue>(&board))
    });

    group.bench_function("Ordered", |b| {
        b.iter(|| solve_with::<OrderedQueue>(&board))
    });

    group.finish();
}

fn bench_hard_nine(c: &mut Criterion) {
    let boards: Vec<Board> = HARD_NINE
        .iter()
        .map(|puzzle| parse::parse(puzzle).unwrap())
        .collect();

    let mut group = c.benchmark_group("hard 9x9 set - queue");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(20));

    group.bench_function("Bucket", |b| {
        b.iter(|| {
            for board in &boards {
                solve_with::<BucketQueue>(board);
            }
        })
    });

    group.bench_function("Ordered", |b| {
        b.iter(|| {
            for board in &boards {
                solve_with::<OrderedQueue>(board);
            }
        })
    });

    group.finish();
}

fn bench_large_boards(c: &mut Criterion) {
    let sixteen = parse::parse(EXAMPLE_SIXTEEN).unwrap();
    let twenty_five = parse::parse(EXAMPLE_TWENTY_FIVE).unwrap();

    let mut group = c.benchmark_group("large boards - queue");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(20));

    group.bench_function("16x16 Bucket", |b| {
        b.iter(|| solve_with::<BucketQueue>(&sixteen))
    });

    group.bench_function("16x16 Ordered", |b| {
        b.iter(|| solve_with::<OrderedQueue>(&sixteen))
    });

    group.bench_function("25x25 Bucket", |b| {
        b.iter(|| solve_with::<BucketQueue>(&twenty_five))
    });

    group.bench_function("25x25 Ordered", |b| {
        b.iter(|| solve_with::<OrderedQueue>(&twenty_five))
    });

    group.finish();
}

criterion_group!(benches, bench_classic_nine, bench_hard_nine, bench_large_boards);

criterion_main!(benches);
