//! Tests for the Parameter implementation

use grblc::parameters::{Bounds, BoundsError, Parameter, ParameterError};

#[test]
fn test_parameter_defaults() {
    let param = Parameter::new("alpha2").unwrap();
    assert_eq!(param.name(), "alpha2");
    assert_eq!(param.description(), "Autogenerated argument from input function.");
    assert_eq!(param.plot_fmt(), "alpha2");
    assert_eq!(param.bounds(), &Bounds::unbounded());
    assert!(param.vary());
}

#[test]
fn test_parameter_rejects_bad_input() {
    assert_eq!(Parameter::new("").unwrap_err(), ParameterError::EmptyName);

    let err = Parameter::new("T").unwrap().with_bounds(10.0, 1e-10).unwrap_err();
    assert_eq!(
        err,
        ParameterError::Bounds(BoundsError::InvalidBounds {
            min: 10.0,
            max: 1e-10
        })
    );

    assert!(Parameter::new("T").unwrap().with_bounds(f64::NAN, 1.0).is_err());
}

#[test]
fn test_parameter_prior() {
    let param = Parameter::new("F").unwrap().with_bounds(-20.0, -2.0).unwrap();
    assert!(param.is_within_bounds(-20.0));
    assert!(param.is_within_bounds(-2.0));
    assert!(param.is_within_bounds(-12.0));
    assert!(!param.is_within_bounds(-1.0));
    assert!(!param.is_within_bounds(f64::NAN));
}

#[test]
fn test_parameter_serialization() {
    let param = Parameter::new("t")
        .unwrap()
        .with_description("log time at peak (log sec)")
        .with_bounds(0.0, f64::INFINITY)
        .unwrap()
        .with_vary(false);

    let json = serde_json::to_string(&param).unwrap();
    assert!(json.contains("\"max\":null"));

    let back: Parameter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, param);
    assert_eq!(back.max(), f64::INFINITY);
    assert!(!back.vary());
}

#[test]
fn test_parameter_deserialization_validates_bounds() {
    let json = r#"{"name":"T","description":"","bounds":{"min":5.0,"max":1.0},
        "vary":true,"plot_fmt":"T"}"#;
    assert!(serde_json::from_str::<Parameter>(json).is_err());

    // Missing bounds default to unbounded
    let json = r#"{"name":"T","description":"","vary":true,"plot_fmt":"T"}"#;
    let param: Parameter = serde_json::from_str(json).unwrap();
    assert_eq!(param.min(), f64::NEG_INFINITY);

    let json = r#"{"name":"","description":"","vary":true,"plot_fmt":""}"#;
    assert!(serde_json::from_str::<Parameter>(json).is_err());
}
