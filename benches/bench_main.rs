use core::str::FromStr;

use bignum_core::BigInt;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_mul(c: &mut Criterion) {
    let a = BigInt::from_str("123456789012345678901234567890123456789012345678901234567890")
        .unwrap();
    let b = BigInt::from_str("987654321098765432109876543210987654321098765432109876543210")
        .unwrap();
    c.bench_function("mul 60-digit operands", |bch| {
        bch.iter(|| black_box(&a) * black_box(&b))
    });
}

fn bench_mod_exp(c: &mut Criterion) {
    let x = BigInt::from(65537i64);
    let y = BigInt::from_str("340282366920938463463374607431768211455").unwrap();
    let m = BigInt::from_str("340282366920938463463374607431768211507").unwrap();
    c.bench_function("mod_exp 128-bit exponent, odd modulus", |bch| {
        bch.iter(|| black_box(&x).mod_exp(black_box(&y), black_box(&m)).unwrap())
    });
}

fn bench_probable_prime(c: &mut Criterion) {
    use bignum_core::probable_prime;
    let witnesses: Vec<BigInt> = [2i64, 3, 5, 7, 11].iter().map(|&v| BigInt::from(v)).collect();
    c.bench_function("probable_prime 128 bits", |bch| {
        bch.iter(|| {
            let mut seed = 0x9E3779B9u32;
            probable_prime(128, black_box(&witnesses), move || {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                seed
            })
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_mul, bench_mod_exp, bench_probable_prime);
criterion_main!(benches);
