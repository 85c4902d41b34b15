use bn254_stark_crypto::{ElementHasher, Poseidon};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use math::BaseElement;

pub fn poseidon_merge(c: &mut Criterion) {
    let a = BaseElement::from(u128::MAX);
    let b = BaseElement::from(42u8);
    c.bench_function("poseidon_merge", |bench| {
        bench.iter(|| Poseidon::merge(black_box(&[a, b])))
    });
}

pub fn poseidon_hash_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("poseidon_hash_elements");
    for &size in [2usize, 8, 32].iter() {
        let values: Vec<BaseElement> = (0..size as u64).map(BaseElement::from).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |bench, values| {
            bench.iter(|| Poseidon::hash_elements(black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(hash_group, poseidon_merge, poseidon_hash_elements);
criterion_main!(hash_group);
