use super::*;

fn plain_mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

#[test]
fn test_empty_is_zero_for_any_leniency() {
    for l in [0.6, 1.0, 1.37, 1.5] {
        assert_eq!(trimmed_average(&[], l), 0.0);
    }
}

#[test]
fn test_short_lists_are_not_trimmed() {
    assert_eq!(trimmed_average(&[14.0], 1.0), 14.0);
    assert_eq!(trimmed_average(&[9.0, 14.0], 1.0), plain_mean(&[9.0, 14.0]));
    assert_eq!(trimmed_average(&[60.0, 2.0], 1.0), 31.0);
}

#[test]
fn test_three_or_more_drop_one_min_and_one_max() {
    assert_eq!(trimmed_average(&[20.0, 27.0, 34.0], 1.0), 27.0);
    assert_eq!(trimmed_average(&[34.0, 20.0, 27.0], 1.0), 27.0);
    assert_eq!(trimmed_average(&[2.0, 9.0, 14.0, 60.0], 1.0), 11.5);
}

#[test]
fn test_duplicates_only_lose_one_position_each_side() {
    // [9, 27, 27, 27] -> drop 9 and one 27
    assert_eq!(trimmed_average(&[27.0, 9.0, 27.0, 27.0], 1.0), 27.0);
    // [5, 5, 5, 51, 51] -> [5, 5, 51]
    assert_eq!(trimmed_average(&[5.0, 51.0, 5.0, 51.0, 5.0], 1.0), 61.0 / 3.0);
}

#[test]
fn test_leniency_divides_result() {
    assert_eq!(trimmed_average(&[27.0], 1.5), 18.0);
    assert_eq!(trimmed_average(&[20.0, 27.0, 34.0], 0.75), 36.0);
}

#[test]
fn test_pure_and_order_independent() {
    let a = [42.0, 9.0, 51.0, 14.0, 27.0];
    let mut b = a;
    b.reverse();
    let first = trimmed_average(&a, 1.1);
    assert_eq!(first.to_bits(), trimmed_average(&b, 1.1).to_bits());
    assert_eq!(first.to_bits(), trimmed_average(&a, 1.1).to_bits());
    assert_eq!(a, [42.0, 9.0, 51.0, 14.0, 27.0]);
}
