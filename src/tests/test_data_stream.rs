use crate::data_stream::{
    OUTLIER_INTERVAL, OUTLIER_MAGNITUDE, StreamError, StreamParams, SyntheticStream,
};

fn params(length: usize, seasonality: bool, noise_level: f64) -> StreamParams {
    StreamParams {
        length,
        seasonality,
        noise_level,
    }
}

#[test]
fn test_yields_exactly_length_points() {
    let stream = SyntheticStream::new(params(350, true, 0.5), 7).unwrap();
    assert_eq!(stream.count(), 350);
}

#[test]
fn test_size_hint_is_exact() {
    let mut stream = SyntheticStream::new(params(10, false, 0.1), 0).unwrap();
    assert_eq!(stream.size_hint(), (10, Some(10)));
    stream.next();
    assert_eq!(stream.size_hint(), (9, Some(9)));
}

#[test]
fn test_deterministic_per_seed() {
    let a: Vec<f64> = SyntheticStream::new(params(100, true, 0.5), 42)
        .unwrap()
        .collect();
    let b: Vec<f64> = SyntheticStream::new(params(100, true, 0.5), 42)
        .unwrap()
        .collect();
    let c: Vec<f64> = SyntheticStream::new(params(100, true, 0.5), 43)
        .unwrap()
        .collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_outliers_at_every_hundredth_index() {
    // no noise, so the outlier offset is exactly visible
    let values: Vec<f64> = SyntheticStream::new(params(300, false, 0.0), 0)
        .unwrap()
        .collect();
    for (t, &v) in values.iter().enumerate() {
        if t % OUTLIER_INTERVAL == 0 {
            assert_eq!(v, OUTLIER_MAGNITUDE);
        } else {
            assert_eq!(v, 0.0);
        }
    }
}

#[test]
fn test_seasonal_pattern() {
    let values: Vec<f64> = SyntheticStream::new(params(200, true, 0.0), 0)
        .unwrap()
        .collect();
    // away from outlier indices the signal is exactly sin(t/50)
    assert!((values[1] - (1.0_f64 / 50.0).sin()).abs() < 1e-12);
    assert!((values[78] - (78.0_f64 / 50.0).sin()).abs() < 1e-12);
    // at an outlier index the offset rides on top of the sine
    assert!((values[100] - ((100.0_f64 / 50.0).sin() + OUTLIER_MAGNITUDE)).abs() < 1e-12);
}

#[test]
fn test_negative_noise_level_rejected() {
    let err = SyntheticStream::new(params(10, true, -0.5), 0).unwrap_err();
    assert_eq!(err, StreamError::NoiseLevel(-0.5));
}

#[test]
fn test_nan_noise_level_rejected() {
    assert!(SyntheticStream::new(params(10, true, f64::NAN), 0).is_err());
}

#[test]
fn test_zero_noise_level_allowed() {
    assert!(SyntheticStream::new(params(10, true, 0.0), 0).is_ok());
}
