use bn254_stark_math::{polynom, BaseElement, FieldElement, StarkField};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn add(c: &mut Criterion) {
    let x = BaseElement::from(u128::MAX);
    let y = BaseElement::TWO_ADIC_ROOT_OF_UNITY;
    c.bench_function("field_add", |bench| {
        bench.iter(|| black_box(x) + black_box(y))
    });
}

pub fn mul(c: &mut Criterion) {
    let x = BaseElement::from(u128::MAX);
    let y = BaseElement::TWO_ADIC_ROOT_OF_UNITY;
    c.bench_function("field_mul", |bench| {
        bench.iter(|| black_box(x) * black_box(y))
    });
}

pub fn exp(c: &mut Criterion) {
    let x = BaseElement::TWO_ADIC_ROOT_OF_UNITY;
    c.bench_function("field_exp", |bench| {
        bench.iter(|| BaseElement::exp(black_box(x), black_box(u64::MAX)))
    });
}

pub fn inv(c: &mut Criterion) {
    let x = BaseElement::TWO_ADIC_ROOT_OF_UNITY;
    c.bench_function("field_inv", |bench| {
        bench.iter(|| BaseElement::inv(black_box(x)))
    });
}

pub fn interpolate(c: &mut Criterion) {
    let root = BaseElement::get_root_of_unity(4);
    let xs = BaseElement::get_power_series_with_offset(root, BaseElement::GENERATOR, 16);
    let ys = BaseElement::get_power_series(BaseElement::from(3u8), 16);
    c.bench_function("polynom_interpolate_16", |bench| {
        bench.iter(|| polynom::interpolate(black_box(&xs), black_box(&ys)))
    });
}

criterion_group!(field_group, add, mul, exp, inv, interpolate);
criterion_main!(field_group);
