use super::*;

#[test]
fn sample_rate_rejects_non_positive() {
    assert!(SampleRate::new(0.0).is_err());
    assert!(SampleRate::new(-5.0).is_err());
    assert!(SampleRate::new(f64::NAN).is_err());
    assert!(SampleRate::new(f64::INFINITY).is_err());
    assert_eq!(SampleRate::new(20.0).unwrap().hz(), 20.0);
}

#[test]
fn default_rate_is_twenty_hz() {
    let rate = SampleRate::default();
    assert_eq!(rate.hz(), 20.0);
    assert_eq!(rate.interval_ms(), 50.0);
}

#[test]
fn intervals_round_to_nearest() {
    let rate = SampleRate::default();
    assert_eq!(rate.intervals_in(1000), 20);
    assert_eq!(rate.intervals_in(800), 16);
    assert_eq!(rate.intervals_in(74), 1);
    assert_eq!(rate.intervals_in(20), 0);
}

#[test]
fn timestamps_round_to_whole_millis() {
    let rate = SampleRate::new(30.0).unwrap();
    assert_eq!(rate.timestamp_of(0), 0);
    assert_eq!(rate.timestamp_of(1), 33);
    assert_eq!(rate.timestamp_of(2), 67);
    assert_eq!(rate.timestamp_of(30), 1000);
}

#[test]
fn bounds_clamp_keeps_margin() {
    let b = BoardBounds::default();
    assert_eq!(b.clamp(Point::new(-40.0, 900.0)), Point::new(10.0, 390.0));
    assert_eq!(b.clamp(Point::new(300.0, 200.0)), Point::new(300.0, 200.0));
    assert_eq!(b.center(), Point::new(300.0, 200.0));
}

#[test]
fn bounds_validate_rejects_degenerate_area() {
    let b = BoardBounds {
        width: 20.0,
        height: 400.0,
        margin: 10.0,
    };
    assert!(b.validate().is_err());
    assert!(BoardBounds::default().validate().is_ok());
}
