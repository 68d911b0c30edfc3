use arcsolve::solver::{
    csp::Csp,
    domain::uniform_domains,
    graph::all_different,
    heuristics::variable::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic},
    stats::SearchStats,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A single all-different group of nine variables over the digits 1..=9,
/// the shape of one Sudoku unit.
fn sudoku_unit_problem() -> Csp<String, i64> {
    let variables: Vec<String> = (0..9).map(|col| format!("r0c{col}")).collect();
    let domains = uniform_domains(&variables, 1..=9i64);
    let edges = all_different(&variables);
    Csp::new(variables, domains, &edges).unwrap()
}

/// A cycle of `n` variables, each adjacent pair constrained to differ,
/// coloured with three values.
fn cycle_colouring_problem(n: u32) -> Csp<u32, u32> {
    let variables: Vec<u32> = (0..n).collect();
    let domains = uniform_domains(&variables, 0..3u32);
    let edges: Vec<(u32, u32)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    Csp::new(variables, domains, &edges).unwrap()
}

/// `n` pairwise-distinct variables over only `n - 1` values. Unsatisfiable,
/// so the search must exhaust the whole space.
fn pigeonhole_problem(n: u32) -> Csp<u32, u32> {
    let variables: Vec<u32> = (0..n).collect();
    let domains = uniform_domains(&variables, 0..(n - 1));
    let edges = all_different(&variables);
    Csp::new(variables, domains, &edges).unwrap()
}

fn bench_ac3(c: &mut Criterion) {
    c.bench_function("ac3_sudoku_unit", |b| {
        b.iter(|| {
            let mut csp = sudoku_unit_problem();
            black_box(csp.ac3());
        })
    });

    c.bench_function("ac3_cycle_48", |b| {
        b.iter(|| {
            let mut csp = cycle_colouring_problem(48);
            black_box(csp.ac3());
        })
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_sudoku_unit_select_first", |b| {
        let csp = sudoku_unit_problem();
        b.iter(|| {
            let mut stats = SearchStats::default();
            black_box(csp.backtracking_search_with(&SelectFirstHeuristic, &mut stats));
        })
    });

    c.bench_function("search_sudoku_unit_mrv", |b| {
        let csp = sudoku_unit_problem();
        b.iter(|| {
            let mut stats = SearchStats::default();
            black_box(csp.backtracking_search_with(&MinimumRemainingValuesHeuristic, &mut stats));
        })
    });

    let mut group = c.benchmark_group("search_pigeonhole");
    for n in [4u32, 5, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let csp = pigeonhole_problem(n);
            b.iter(|| {
                let mut stats = SearchStats::default();
                black_box(csp.backtracking_search_with(&SelectFirstHeuristic, &mut stats));
            })
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_cycle_48", |b| {
        b.iter(|| {
            let mut csp = cycle_colouring_problem(48);
            black_box(csp.solve());
        })
    });
}

criterion_group!(benches, bench_ac3, bench_search, bench_solve);
criterion_main!(benches);
