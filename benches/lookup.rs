use criterion::{criterion_group, criterion_main, Criterion};
use keyed_bloom::{Filter, KeyedBloomFilter, Params, Xxh3};
use rand::distributions::Uniform;
use rand::prelude::IteratorRandom;
use rand::{thread_rng, Rng};
use std::collections::HashSet;

fn filled_filter(n: u32) -> (KeyedBloomFilter, HashSet<[u8; 8]>) {
    let mut bf = Params::from_capacity(n as u64, 0.02)
        .build()
        .init(&mut thread_rng())
        .unwrap();
    let mut track_inserted = HashSet::new();

    let mut rng = thread_rng();
    let distribution = Uniform::new_inclusive(0, 10u64.pow(12));
    for _ in 0..n {
        let value = rng.sample(distribution).to_be_bytes();
        bf.insert(&value);
        track_inserted.insert(value);
    }
    (bf, track_inserted)
}

pub fn lookup_values(c: &mut Criterion) {
    let (bf, track_inserted) = filled_filter(10u32.pow(5));

    let mut rng = thread_rng();
    let distribution = Uniform::new_inclusive(0, 10u64.pow(12));

    let mut bgroup = c.benchmark_group("lookup-values");
    bgroup.bench_function("lookup-random-values", |b| {
        b.iter(|| bf.lookup(&rng.sample(distribution).to_be_bytes()))
    });

    bgroup.bench_function("lookup-inserted-values", |b| {
        b.iter(|| bf.lookup(track_inserted.iter().choose(&mut rng).unwrap()))
    });
}

pub fn insert_values(c: &mut Criterion) {
    let params = Params::from_capacity(10u64.pow(6), 0.02);
    let mut hmac = params.build().init(&mut thread_rng()).unwrap();
    let mut xxh3 = params.build().with_hasher(Xxh3).init(&mut thread_rng()).unwrap();

    let mut rng = thread_rng();
    let distribution = Uniform::new_inclusive(0, 10u64.pow(12));

    let mut bgroup = c.benchmark_group("insert-values");
    bgroup.bench_function("insert-hmac-sha1", |b| {
        b.iter(|| hmac.insert(&rng.sample(distribution).to_be_bytes()))
    });

    bgroup.bench_function("insert-xxh3", |b| {
        b.iter(|| xxh3.insert(&rng.sample(distribution).to_be_bytes()))
    });
}

criterion_group!(benches, lookup_values, insert_values);
criterion_main!(benches);
