use criterion::*;
use fnv::FnvBuildHasher;
use fxhash::FxBuildHasher;
use hash64::{FarmBuildHasher, FarmHashMap, FarmState, MurmurState};
use std::collections::HashMap;
use std::hash::BuildHasher;

const SIZE: u64 = 100_000;

fn create_string(len: usize) -> String {
    let mut string = String::default();
    for pos in 1..=len {
        let c = (48 + (pos % 10) as u8) as char;
        string.push(c);
    }
    string
}

fn fill_and_probe<B: BuildHasher + Default>() -> u64 {
    let map: HashMap<u64, u64, B> = (0..SIZE).map(|i| (i, i)).collect();
    let mut sum = 0;
    for i in 0..SIZE {
        if let Some(x) = map.get(&i) {
            sum += x;
        }
    }
    sum
}

fn compare_int_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    group.bench_function("farm-alias", |b| {
        b.iter(|| {
            let map: FarmHashMap<u64, u64> = (0..SIZE).map(|i| (i, i)).collect();
            black_box(map.len())
        })
    });
    group.bench_function("farm", |b| b.iter(|| black_box(fill_and_probe::<FarmState>())));
    group.bench_function("farm-unseeded", |b| b.iter(|| black_box(fill_and_probe::<FarmBuildHasher>())));
    group.bench_function("murmur", |b| b.iter(|| black_box(fill_and_probe::<MurmurState>())));
    group.bench_function("fnv", |b| b.iter(|| black_box(fill_and_probe::<FnvBuildHasher>())));
    group.bench_function("fx", |b| b.iter(|| black_box(fill_and_probe::<FxBuildHasher>())));
}

fn compare_string_hash(c: &mut Criterion) {
    let string = create_string(1024);
    let farm = FarmState::new();
    let murmur = MurmurState::new();
    c.bench_with_input(BenchmarkId::new("compare_farm", "string"), &string, |bencher, s| {
        bencher.iter(|| black_box(farm.hash_one(s)));
    });
    c.bench_with_input(BenchmarkId::new("compare_murmur", "string"), &string, |bencher, s| {
        bencher.iter(|| black_box(murmur.hash_one(s)));
    });
    c.bench_with_input(BenchmarkId::new("compare_fnv", "string"), &string, |bencher, s| {
        bencher.iter(|| black_box(FnvBuildHasher::default().hash_one(s)));
    });
    c.bench_with_input(BenchmarkId::new("compare_fx", "string"), &string, |bencher, s| {
        bencher.iter(|| black_box(FxBuildHasher::default().hash_one(s)));
    });
}

criterion_main!(compare);
criterion_group!(compare, compare_int_maps, compare_string_hash);
