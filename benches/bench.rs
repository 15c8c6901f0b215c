use criterion::{black_box, criterion_group, criterion_main, Criterion};

use burrow_sort::{cheapest_path, parse_burrow, search, SearchLimits};

const SHALLOW_INPUT: &str = "
#############
#...........#
###D#C#B#A###
  #########";

const MEDIUM_INPUT: &str = "
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########";

const DEEP_INPUT: &str = "
#############
#...........#
###B#C#B#D###
  #D#C#B#A#
  #D#B#A#C#
  #A#D#C#A#
  #########";

fn criterion_bench(c: &mut Criterion) {
    let limits = SearchLimits::default();

    c.bench_function("shallow", |b| {
        let input = parse_burrow(SHALLOW_INPUT).unwrap();
        b.iter(|| {
            search(black_box(&input), &limits);
        })
    });

    c.bench_function("medium", |b| {
        let input = parse_burrow(MEDIUM_INPUT).unwrap();
        b.iter(|| {
            search(black_box(&input), &limits);
        })
    });

    c.bench_function("medium path", |b| {
        let input = parse_burrow(MEDIUM_INPUT).unwrap();
        b.iter(|| {
            cheapest_path(black_box(&input));
        })
    });

    let mut group = c.benchmark_group("deep");
    group.sample_size(10);
    group.bench_function("deep", |b| {
        let input = parse_burrow(DEEP_INPUT).unwrap();
        b.iter(|| {
            search(black_box(&input), &limits);
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
