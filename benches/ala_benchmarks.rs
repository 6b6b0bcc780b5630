//! Ala Trie Benchmarks
//!
//! Compares the sparse and dense backends on insertion, exact lookup and
//! prefix enumeration. The benchmarks are implemented using the Criterion
//! framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use ala::{AlaTrie, DenseTrie, SparseTrie};
use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

/// Spells `n` in base 26 over `a..=z`, left-padded with `a` to `width`.
fn word(mut n: usize, width: usize) -> String {
    let mut letters = vec![b'a'; width];
    for slot in letters.iter_mut().rev() {
        *slot = b'a' + (n % 26) as u8;
        n /= 26;
    }
    String::from_utf8(letters).unwrap_or_default()
}

fn words(count: usize, width: usize) -> Vec<String> {
    (0..count).map(|i| word(i, width)).collect()
}

fn bench_backend<T, F>(c: &mut Criterion, name: &str, make: F)
where
    T: AlaTrie<Value = usize>,
    F: Fn() -> T,
{
    let mut group = c.benchmark_group(name);
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insert benchmark with different key lengths
    for key_length in [4, 8, 16].iter() {
        let keys = words(1000, *key_length);
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("insert", key_length), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = make();
                for (i, key) in keys.iter().enumerate() {
                    black_box(trie.add_word(key, i).ok());
                }
                trie
            });
        });
    }

    let keys = words(10_000, 6);
    let mut trie = make();
    for (i, key) in keys.iter().enumerate() {
        let _ = trie.add_word(key, i);
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function("translate", |b| {
        let mut index = 0;
        b.iter(|| {
            // Cycle through keys for lookups
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.translate(key));
        });
    });

    group.bench_function("auto_complete", |b| {
        let mut index = 0;
        b.iter(|| {
            let prefix = &keys[(index * 26) % keys.len()][..4];
            index += 1;
            black_box(trie.auto_complete(prefix));
        });
    });

    group.bench_function("remove_and_reinsert", |b| {
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.remove(key));
            black_box(trie.add_word(key, index).ok());
        });
    });

    group.finish();
}

/// Benchmark the ordered-map backend
fn bench_sparse_trie(c: &mut Criterion) {
    bench_backend(c, "sparse_trie", SparseTrie::<usize>::new);
}

/// Benchmark the fixed-array backend
fn bench_dense_trie(c: &mut Criterion) {
    bench_backend(c, "dense_trie", DenseTrie::<usize>::new);
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_sparse_trie, bench_dense_trie
}

criterion_main!(benches);
