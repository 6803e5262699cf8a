use sukasi::clamp;
use sukasi::model::{clamp_opacity, clamp_width_ratio, DEFAULT_OPACITY, DEFAULT_WIDTH_RATIO};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn clamp_accepts_bounds() {
    assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
}

#[test]
fn opacity_never_reaches_zero() {
    assert!(clamp_opacity(0.0) > 0.0);
    assert!(clamp_opacity(-0.5) > 0.0);
    assert!(clamp_opacity(f64::NEG_INFINITY) > 0.0);
}

#[test]
fn width_ratio_never_exceeds_display() {
    assert_eq!(clamp_width_ratio(3.0), 1.0);
    assert_eq!(clamp_width_ratio(f64::INFINITY), 1.0);
}

#[test]
fn nan_falls_back_to_defaults() {
    assert_eq!(clamp_opacity(f64::NAN), DEFAULT_OPACITY);
    assert_eq!(clamp_width_ratio(f64::NAN), DEFAULT_WIDTH_RATIO);
}
