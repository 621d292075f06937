use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use prime_hashmap::{
    find_mode, hash_function_2, BuildHasherKey, ChainedMap, HashFn, OpenAddressingMap,
};
use std::collections::hash_map::RandomState;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert_10k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(1).take(10_000).map(key).collect();
    let mut g = c.benchmark_group("insert_10k");
    g.bench_function("open_addressing/fn2", |b| {
        b.iter_batched(
            || OpenAddressingMap::<u64, HashFn>::new(11, hash_function_2),
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.bench_function("open_addressing/siphash", |b| {
        b.iter_batched(
            || OpenAddressingMap::new(11, BuildHasherKey::<RandomState>::default()),
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    // Chaining does not grow on its own; size it up front for a fair load.
    g.bench_function("chained/fn2_presized", |b| {
        b.iter_batched(
            || ChainedMap::<u64, HashFn>::new(10_007, hash_function_2),
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.bench_function("hashbrown", |b| {
        b.iter_batched(
            hashbrown::HashMap::<String, u64>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.insert(k.clone(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.finish();
}

fn bench_lookup_hit_miss(c: &mut Criterion) {
    let keys: Vec<String> = lcg(7).take(10_000).map(key).collect();
    let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();

    let mut oa = OpenAddressingMap::<u64, HashFn>::new(11, hash_function_2);
    let mut ch = ChainedMap::<u64, HashFn>::new(10_007, hash_function_2);
    for (i, k) in keys.iter().enumerate() {
        oa.put(k, i as u64);
        ch.put(k, i as u64);
    }

    let mut g = c.benchmark_group("lookup_10k");
    g.bench_function("open_addressing/hit", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(oa.get(k));
            }
        })
    });
    g.bench_function("open_addressing/miss", |b| {
        b.iter(|| {
            for k in &misses {
                black_box(oa.get(k));
            }
        })
    });
    g.bench_function("chained/hit", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(ch.get(k));
            }
        })
    });
    g.bench_function("chained/miss", |b| {
        b.iter(|| {
            for k in &misses {
                black_box(ch.get(k));
            }
        })
    });
    g.finish();
}

// Remove half, then reinsert: exercises tombstone reuse on the open
// addressing side.
fn bench_churn(c: &mut Criterion) {
    let keys: Vec<String> = lcg(5).take(10_000).map(key).collect();
    c.bench_function("open_addressing/churn_5k", |b| {
        b.iter_batched(
            || {
                let mut m = OpenAddressingMap::<u64, HashFn>::new(11, hash_function_2);
                for (i, k) in keys.iter().enumerate() {
                    m.put(k, i as u64);
                }
                m
            },
            |mut m| {
                for k in keys.iter().step_by(2) {
                    black_box(m.remove(k));
                }
                for (i, k) in keys.iter().enumerate().step_by(2) {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_mode(c: &mut Criterion) {
    let words: Vec<u64> = lcg(9).take(10_000).map(|x| x % 500).collect();
    c.bench_function("find_mode/10k_over_500", |b| {
        b.iter(|| black_box(find_mode(words.iter().copied())))
    });
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .sample_size(20)
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_insert_10k, bench_lookup_hit_miss, bench_churn, bench_find_mode
}
criterion_main!(benches);
