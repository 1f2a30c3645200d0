use float_cmp::assert_approx_eq;
use test_case::test_case;

use distances::sets::{dice, jaccard};

#[test_case(&[1, 0, 1], &[1, 1, 0], 2.0 / 3.0 ; "one shared of three")]
#[test_case(&[1, 0, 1], &[0, 0, 1], 0.5 ; "subset")]
#[test_case(&[1, 1, 0], &[0, 0, 1], 1.0 ; "disjoint")]
#[test_case(&[1, 1, 1], &[1, 1, 1], 0.0 ; "identical")]
#[test_case(&[0, 0, 0], &[0, 0, 0], 0.0 ; "both empty")]
#[test_case(&[0, 0, 0], &[0, 1, 0], 1.0 ; "one empty")]
fn jaccard_presence(x: &[u8], y: &[u8], expected: f64) {
    let actual: f64 = jaccard(x, y);
    assert_approx_eq!(f64, actual, expected);
}

#[test]
fn jaccard_treats_nonzero_as_present() {
    let counts = [3_i32, 0, -7, 12];
    let flags = [true, false, true, true];
    let other = [true, true, false, true];

    let from_counts: f64 = jaccard(&counts, &[1, 5, 0, 2]);
    let from_flags: f64 = jaccard(&flags, &other);
    assert_approx_eq!(f64, from_counts, from_flags);
    assert_approx_eq!(f64, from_flags, 0.5);
}

#[test]
fn dice_presence() {
    let x = [true, true, true, false, false];
    let y = [false, false, true, true, true];

    let distance: f32 = dice(&x, &y);
    assert_approx_eq!(f32, distance, 4.0 / 6.0);

    let distance: f32 = dice(&x, &x);
    assert_approx_eq!(f32, distance, 0.0);

    let empty = [false; 5];
    let distance: f32 = dice(&empty, &empty);
    assert_approx_eq!(f32, distance, 0.0);
}

/// Random testing of set distances against counts made by hand.
#[test]
fn sets_random() {
    let data = symagen::random_data::random_presence(40, 300, 42);

    for x in &data {
        for y in &data {
            let mut union = 0_usize;
            let mut intersection = 0_usize;
            let mut size = 0_usize;
            for (&a, &b) in x.iter().zip(y) {
                if a || b {
                    union += 1;
                }
                if a && b {
                    intersection += 1;
                }
                size += usize::from(a) + usize::from(b);
            }

            let expected = if union == 0 {
                0.0
            } else {
                1.0 - (intersection as f64) / (union as f64)
            };
            let actual: f64 = jaccard(x, y);
            assert!((actual - expected).abs() <= 1e-12, "Jaccard: expected {expected}, actual {actual}");

            let expected = if size == 0 {
                0.0
            } else {
                1.0 - 2.0 * (intersection as f64) / (size as f64)
            };
            let actual: f64 = dice(x, y);
            assert!((actual - expected).abs() <= 1e-12, "Dice: expected {expected}, actual {actual}");
        }
    }
}
