//! Tests for Model construction and evaluation

use grblc::model::{Model, ModelFunction, ModelKind};
use grblc::models::{self, sharp_bpl_function, w07_function};
use grblc::parameters::Parameter;
use grblc::{EvalOptions, GrbError};
use ndarray::{array, Array1};

fn named(names: &[&str]) -> Vec<Parameter> {
    names.iter().map(|n| Parameter::new(n).unwrap()).collect()
}

#[test]
fn test_construction_fails_iff_unknown_name() {
    let candidates = ["T", "F", "alpha", "t", "alpha1", "S", "x"];
    let accepted = ["T", "F", "alpha", "t"];

    // Every pair of candidate names
    for a in candidates {
        for b in candidates {
            let result = Model::new(w07_function()).unwrap().with_func_args(named(&[a, b]));
            let valid = accepted.contains(&a) && accepted.contains(&b);
            assert_eq!(result.is_ok(), valid, "parameters {} and {}", a, b);
        }
    }
}

#[test]
fn test_invalid_argument_message() {
    let err = Model::new(sharp_bpl_function())
        .unwrap()
        .with_name("my bpl")
        .with_func_args(named(&["T", "beta"]))
        .unwrap_err();

    assert!(matches!(err, GrbError::InvalidArgument { .. }));
    let msg = err.to_string();
    assert!(msg.starts_with("beta is not a valid argument for the my bpl model."));
    assert!(msg.contains("alpha2"));
}

#[test]
fn test_bounds_length() {
    let model = Model::new(w07_function()).unwrap();
    assert!(matches!(
        model.clone().with_bounds(&[0.0, 1.0, 2.0]),
        Err(GrbError::BoundsLength(3))
    ));

    let model = model.with_bounds(&[2.0, 8.0, -20.0, -8.0]).unwrap();
    assert_eq!(model.bounds(), &[2.0, 8.0, -20.0, -8.0]);
}

#[test]
fn test_extra_parameters_are_ignored() {
    let model = models::simple_bpl_model();
    let x = array![4.0, 5.0, 6.0];
    let exact = model.eval(&x, &[5.0, -12.0, 1.0, 2.0]).unwrap();
    let extra = model.eval(&x, &[5.0, -12.0, 1.0, 2.0, 99.0, -1.0]).unwrap();
    assert_eq!(exact, extra);

    assert!(matches!(
        model.eval(&x, &[5.0, -12.0]),
        Err(GrbError::DimensionMismatch(_))
    ));
}

#[test]
fn test_custom_model() {
    let line =
        ModelFunction::new("line", &["m", "b"], |x, p, _| Ok(x.mapv(|x| p[0] * x + p[1]))).unwrap();
    let model = Model::new(line)
        .unwrap()
        .with_func_args(vec![
            Parameter::new("m").unwrap().with_bounds(-5.0, 0.0).unwrap(),
            Parameter::new("b").unwrap(),
        ])
        .unwrap()
        .with_slug("line");

    assert_eq!(model.kind(), ModelKind::Custom);
    assert_eq!(model.to_string(), "Model(line)");
    assert_eq!(model["m"].max(), 0.0);

    let y = model.eval(&Array1::linspace(0.0, 2.0, 3), &[-1.0, 4.0]).unwrap();
    assert_eq!(y, array![4.0, 3.0, 2.0]);
}

#[test]
fn test_custom_function_validation() {
    assert!(ModelFunction::new("bad", &["a", "a"], |x, _, _| Ok(x.to_owned())).is_err());
    assert!(ModelFunction::new("bad", &["a", ""], |x, _, _| Ok(x.to_owned())).is_err());

    // Wrong output length is caught at evaluation
    let short = ModelFunction::new("short", &["a"], |_, p, _| Ok(array![p[0]])).unwrap();
    let model = Model::new(short).unwrap();
    assert!(matches!(
        model.eval(&array![1.0, 2.0], &[1.0]),
        Err(GrbError::DimensionMismatch(_))
    ));
}

#[test]
fn test_subset_of_parameters_fails_on_evaluation() {
    let model = Model::new(w07_function())
        .unwrap()
        .with_func_args(named(&["T", "F"]))
        .unwrap();
    assert_eq!(model.len(), 2);
    assert!(model.eval(&array![5.0], &[5.0, -12.0]).is_err());
}

#[test]
fn test_options_reach_custom_function() {
    let strict_only = ModelFunction::new("strict_only", &["a"], |x, p, options: &EvalOptions| {
        if options.is_strict() {
            Ok(x.mapv(|_| p[0]))
        } else {
            Err(GrbError::InvalidInput("permissive".to_string()))
        }
    })
    .unwrap();
    let model = Model::new(strict_only).unwrap();

    assert!(model.eval(&array![1.0], &[2.0]).is_ok());
    assert!(model.eval_with(&array![1.0], &[2.0], &EvalOptions::permissive()).is_err());
}

#[test]
fn test_set_vary() {
    let mut model = models::w07_model(true);
    model.set_vary("t", false).unwrap();
    assert!(!model["t"].vary());
    assert!(model.set_vary("tau", false).is_err());
}

#[test]
fn test_presets_are_independent() {
    let mut first = models::w07_model(true);
    first.set_vary("alpha", false).unwrap();
    assert!(models::w07_model(true)["alpha"].vary());
}

#[test]
fn test_iteration_order() {
    let model = models::smooth_bpl_model();
    let names: Vec<&str> = (&model).into_iter().collect();
    assert_eq!(names, vec!["T", "F", "alpha1", "alpha2", "S"]);
    assert_eq!(model.iter().len(), 5);
}
