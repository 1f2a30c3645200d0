use float_cmp::assert_approx_eq;
use rand::prelude::*;
use symagen::random_data;
use test_case::test_case;

use distances::vectors::{bray_curtis, canberra, chebyshev, cosine, euclidean, euclidean_sq, hamming, manhattan, minkowski};

fn l1(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).fold(0., |acc, (x, y)| acc + (x - y).abs())
}

fn l2_sq(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).fold(0., |acc, (x, y)| acc + (x - y).powi(2))
}

fn l3(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y.iter())
        .fold(0., |acc, (x, y)| acc + (x - y).abs().powi(3))
        .cbrt()
}

fn l_inf(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).fold(0., |acc, (x, y)| acc.max((x - y).abs()))
}

#[test_case(10, 5 ; "10x5")]
#[test_case(50, 100 ; "50x100")]
fn lp_f64(cardinality: usize, dimensionality: usize) {
    let data = random_data::random_tabular(
        cardinality,
        dimensionality,
        -10.0_f64,
        10.0,
        &mut StdRng::seed_from_u64(42),
    );

    for x in &data {
        for y in &data {
            let actual: f64 = manhattan(x, y);
            assert!((l1(x, y) - actual).abs() <= 1e-9, "Manhattan: {} vs {actual}", l1(x, y));

            let actual: f64 = euclidean_sq(x, y);
            assert!((l2_sq(x, y) - actual).abs() <= 1e-9, "Euclidean squared: {} vs {actual}", l2_sq(x, y));

            let actual: f64 = euclidean(x, y);
            assert!((l2_sq(x, y).sqrt() - actual).abs() <= 1e-9, "Euclidean: {actual}");

            let actual: f64 = minkowski(x, y, 3.0);
            assert!((l3(x, y) - actual).abs() <= 1e-6, "Minkowski-3: {} vs {actual}", l3(x, y));

            let actual: f64 = chebyshev(x, y);
            assert_approx_eq!(f64, l_inf(x, y), actual);
        }
    }
}

#[test]
fn minkowski_special_orders() {
    let x = [1.0_f32, -2.0, 3.5];
    let y = [0.5_f32, 2.0, -1.0];

    let m1: f32 = minkowski(&x, &y, 1.0);
    let l1: f32 = manhattan(&x, &y);
    assert_approx_eq!(f32, m1, l1);

    let m2: f32 = minkowski(&x, &y, 2.0);
    let l2: f32 = euclidean(&x, &y);
    assert_approx_eq!(f32, m2, l2);

    let m_inf: f32 = minkowski(&x, &y, f32::INFINITY);
    let l_inf: f32 = chebyshev(&x, &y);
    assert_approx_eq!(f32, m_inf, l_inf);
}

#[test]
fn minkowski_fractional_order() {
    let x = [0.0_f64, 0.0];
    let y = [1.0_f64, 1.0];

    let actual: f64 = minkowski(&x, &y, 1.5);
    assert_approx_eq!(f64, actual, 2.0_f64.powf(1.0 / 1.5), ulps = 4);

    let l1: f64 = minkowski(&x, &y, 1.0);
    let l2: f64 = minkowski(&x, &y, 2.0);
    assert!(l2 < actual && actual < l1);
}

#[test]
fn integer_inputs() {
    let x = [0_u8, 3];
    let y = [4_u8, 0];

    let d: f64 = euclidean(&x, &y);
    assert_approx_eq!(f64, d, 5.0);

    let d: f64 = manhattan(&x, &y);
    assert_approx_eq!(f64, d, 7.0);

    let d: f64 = chebyshev(&x, &y);
    assert_approx_eq!(f64, d, 4.0);
}

#[test_case(&[1.0, 0.0], &[0.0, 1.0], 1.0 ; "orthogonal")]
#[test_case(&[1.0, 1.0], &[2.0, 2.0], 0.0 ; "parallel")]
#[test_case(&[1.0, 0.0], &[-1.0, 0.0], 2.0 ; "opposite")]
#[test_case(&[0.0, 0.0], &[1.0, 2.0], 1.0 ; "zero vector")]
fn cosine_cases(x: &[f64], y: &[f64], expected: f64) {
    let actual: f64 = cosine(x, y);
    assert!((actual - expected).abs() <= 1e-12, "expected {expected}, actual {actual}");
}

#[test]
fn normalized_distances() {
    let x = [1_i32, 2, 0, 4];
    let y = [1_i32, 0, 0, 2];

    let d: f64 = hamming(&x, &y);
    assert_approx_eq!(f64, d, 0.5);

    // The third position is zero in both and is skipped.
    let d: f64 = canberra(&x, &y);
    assert_approx_eq!(f64, d, 1.0 + 2.0 / 6.0);

    let d: f64 = bray_curtis(&x, &y);
    assert_approx_eq!(f64, d, 4.0 / 10.0);

    let zeros = [0_i32; 4];
    let d: f64 = bray_curtis(&zeros, &zeros);
    assert_approx_eq!(f64, d, 0.0);

    let d: f64 = hamming::<i32, f64>(&[], &[]);
    assert_approx_eq!(f64, d, 0.0);
}

#[test]
fn symmetry_and_identity() {
    let data = random_data::random_tabular(20, 16, 0.0_f64, 5.0, &mut StdRng::seed_from_u64(7));
    let functions: [(&str, fn(&[f64], &[f64]) -> f64); 7] = [
        ("euclidean", euclidean),
        ("manhattan", manhattan),
        ("chebyshev", chebyshev),
        ("cosine", cosine),
        ("canberra", canberra),
        ("bray_curtis", bray_curtis),
        ("hamming", hamming),
    ];

    for (name, f) in functions {
        for x in &data {
            assert!(f(x, x).abs() <= 1e-12, "{name}: non-zero self distance");
            for y in &data {
                assert_approx_eq!(f64, f(x, y), f(y, x), epsilon = 1e-12);
            }
        }
    }
}
