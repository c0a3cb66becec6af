use mobility_qc::math::stats::{max_abs, mean, population_std_dev, rms, round_to};

#[test]
fn mean_basic_and_empty() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn rms_of_constant_is_constant() {
    assert!((rms(&[5.0, 5.0, 5.0]) - 5.0).abs() < 1e-12);
    assert!((rms(&[3.0, 5.0]) - 17f64.sqrt()).abs() < 1e-12);
    assert!(rms(&[-2.0, 2.0]) > 0.0);
}

#[test]
fn population_sd_divides_by_n() {
    let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert!((sd - 2.0).abs() < 1e-12);
    assert_eq!(population_std_dev(&[3.0]), 0.0);
}

#[test]
fn max_abs_ignores_sign() {
    assert_eq!(max_abs([1.0, -7.5, 3.0]), 7.5);
    assert_eq!(max_abs(Vec::<f64>::new()), 0.0);
}

#[test]
fn round_to_decimals() {
    assert_eq!(round_to(4.1231, 2), 4.12);
    assert_eq!(round_to(7.66, 1), 7.7);
    assert_eq!(round_to(2.0, 2), 2.0);
}
