use super::*;
use crate::model::Model;
use approx::assert_relative_eq;
use assert_matches::assert_matches;
use levenberg_marquardt::differentiate_numerically;

fn double_exponential_model_with_offset() -> Model {
    Model::new(
        &["tau1", "tau2", "c1", "c2", "offset"],
        |t: f64, tau1: f64, tau2: f64, c1: f64, c2: f64, offset: f64| {
            c1 * (-t / tau1).exp() + c2 * (-t / tau2).exp() + offset
        },
    )
    .expect("valid model must build")
}

fn tvec() -> DVector<f64> {
    DVector::from_vec(vec![0., 1., 2., 3., 4., 5., 6., 7., 8., 9., 10.])
}

// y = 2*exp(-t/2)+exp(-t/4)+1
fn yvec() -> DVector<f64> {
    DVector::from_vec(vec![
        4.0000, 2.9919, 2.3423, 1.9186, 1.6386, 1.4507, 1.3227, 1.2342, 1.1720, 1.1276, 1.0956,
    ])
}

fn initial_parameters(model: &Model) -> Parameters {
    model
        .make_params([
            ("tau1", 2.5),
            ("tau2", 5.),
            ("c1", 1.5),
            ("c2", 1.5),
            ("offset", 0.5),
        ])
        .expect("guesses are complete")
}

#[test]
fn builder_produces_problem_with_correct_data() {
    let model = double_exponential_model_with_offset();
    let params = initial_parameters(&model);
    let problem = FitProblemBuilder::new(model)
        .independent_variable(tvec())
        .observations(yvec())
        .parameters(params.clone())
        .build()
        .expect("valid problem must build");

    assert_eq!(problem.independent_variable(), &tvec());
    assert_eq!(problem.observations(), &yvec());
    assert_eq!(problem.parameters(), &params);
    assert_eq!(problem.weights(), &Weights::Unit);
    assert_eq!(problem.data_count(), 11);
    assert_eq!(problem.varied_count(), 5);
    assert_eq!(problem.params(), DVector::from_vec(vec![2.5, 5., 1.5, 1.5, 0.5]));
}

#[test]
fn residuals_are_weighted_differences_of_data_and_model() {
    let model = double_exponential_model_with_offset();
    let params = initial_parameters(&model);
    let weights = DVector::from_element(11, 2.);
    let problem = FitProblemBuilder::new(model.clone())
        .independent_variable(tvec())
        .observations(yvec())
        .parameters(params.clone())
        .weights(weights)
        .build()
        .expect("valid problem must build");

    let expected = (yvec() - model.eval(&tvec(), &params.values()).unwrap()) * 2.;
    assert_relative_eq!(problem.residuals().unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn set_params_only_changes_varied_parameters() {
    let model = double_exponential_model_with_offset();
    let mut params = initial_parameters(&model);
    params.set_vary("c2", false).unwrap();
    params.set_vary("offset", false).unwrap();
    let mut problem = FitProblemBuilder::new(model)
        .independent_variable(tvec())
        .observations(yvec())
        .parameters(params)
        .build()
        .expect("valid problem must build");

    assert_eq!(problem.varied_count(), 3);
    problem.set_params(&DVector::from_vec(vec![2., 4., 2.]));
    assert_eq!(problem.params(), DVector::from_vec(vec![2., 4., 2.]));
    assert_eq!(problem.parameters().values(), vec![2., 4., 2., 1.5, 0.5]);
}

#[test]
fn jacobian_of_least_squares_problem_matches_numerical_derivative() {
    let model = double_exponential_model_with_offset();
    let params = initial_parameters(&model);
    let mut problem = FitProblemBuilder::new(model)
        .independent_variable(tvec())
        .observations(yvec())
        .parameters(params)
        .weights(DVector::from_fn(11, |idx, _| 1. + idx as f64 / 10.))
        .build()
        .expect("valid problem must build");

    let jacobian_numerical =
        differentiate_numerically(&mut problem).expect("Numerical differentiation must succeed.");
    let jacobian_calculated = problem.jacobian().expect("Jacobian must not be empty!");
    assert_relative_eq!(jacobian_numerical, jacobian_calculated, epsilon = 1e-5);
}

#[test]
fn jacobian_contains_only_columns_of_varied_parameters() {
    let model = double_exponential_model_with_offset();
    let mut params = initial_parameters(&model);
    params.set_vary("tau1", false).unwrap();
    let problem = FitProblemBuilder::new(model)
        .independent_variable(tvec())
        .observations(yvec())
        .parameters(params)
        .build()
        .expect("valid problem must build");

    let jacobian = problem.jacobian().expect("Jacobian must not be empty!");
    assert_eq!(jacobian.shape(), (11, 4));
    // derivative of the residuals with respect to the offset
    jacobian
        .column(3)
        .iter()
        .for_each(|&value| assert_relative_eq!(value, -1., epsilon = 1e-8));
}

#[test]
fn builder_fails_for_missing_fields() {
    let model = double_exponential_model_with_offset();
    let params = initial_parameters(&model);
    assert_matches!(
        FitProblemBuilder::new(model.clone())
            .observations(yvec())
            .parameters(params.clone())
            .build(),
        Err(FitProblemBuilderError::XDataMissing)
    );
    assert_matches!(
        FitProblemBuilder::new(model.clone())
            .independent_variable(tvec())
            .parameters(params)
            .build(),
        Err(FitProblemBuilderError::YDataMissing)
    );
    assert_matches!(
        FitProblemBuilder::new(model)
            .independent_variable(tvec())
            .observations(yvec())
            .build(),
        Err(FitProblemBuilderError::ParametersMissing)
    );
}

#[test]
fn builder_fails_for_inconsistent_data() {
    let model = double_exponential_model_with_offset();
    let params = initial_parameters(&model);
    let builder = FitProblemBuilder::new(model).parameters(params);

    assert_matches!(
        builder
            .clone()
            .independent_variable(DVector::from_vec(vec![0., 1.]))
            .observations(DVector::from_vec(vec![0., 1., 2.]))
            .build(),
        Err(FitProblemBuilderError::InvalidLengthOfData {
            x_length: 2,
            y_length: 3
        })
    );
    assert_matches!(
        builder
            .clone()
            .independent_variable(DVector::zeros(0))
            .observations(DVector::zeros(0))
            .build(),
        Err(FitProblemBuilderError::ZeroLengthVector)
    );
    let mut y_with_nan = yvec();
    y_with_nan[3] = f64::NAN;
    assert_matches!(
        builder
            .clone()
            .independent_variable(tvec())
            .observations(y_with_nan)
            .build(),
        Err(FitProblemBuilderError::NonFiniteData)
    );
    assert_matches!(
        builder
            .clone()
            .independent_variable(tvec())
            .observations(yvec())
            .weights(DVector::from_element(10, 1.))
            .build(),
        Err(FitProblemBuilderError::InvalidLengthOfWeights)
    );
    assert_matches!(
        builder
            .clone()
            .independent_variable(tvec())
            .observations(yvec())
            .weights(DVector::from_element(11, f64::INFINITY))
            .build(),
        Err(FitProblemBuilderError::NonFiniteWeights)
    );
    assert_matches!(
        builder
            .independent_variable(DVector::from_vec(vec![0., 1., 2., 3.]))
            .observations(DVector::from_vec(vec![0., 1., 2., 3.]))
            .build(),
        Err(FitProblemBuilderError::Underdetermined {
            data_count: 4,
            varied_count: 5
        })
    );
}

#[test]
fn builder_fails_for_parameters_of_another_model() {
    let model = double_exponential_model_with_offset();
    let other = Model::new(&["a", "b"], |x: f64, a: f64, b: f64| a * x + b).unwrap();
    let params = other.make_params([("a", 1.), ("b", 1.)]).unwrap();
    assert_matches!(
        FitProblemBuilder::new(model)
            .independent_variable(tvec())
            .observations(yvec())
            .parameters(params)
            .build(),
        Err(FitProblemBuilderError::ParameterMismatch { .. })
    );
}

#[test]
fn builder_fails_if_all_parameters_are_fixed() {
    let model = Model::new(&["a", "b"], |x: f64, a: f64, b: f64| a * x + b).unwrap();
    let mut params = model.make_params([("a", 1.), ("b", 1.)]).unwrap();
    params.set_vary("a", false).unwrap();
    params.set_vary("b", false).unwrap();
    assert_matches!(
        FitProblemBuilder::new(model)
            .independent_variable(tvec())
            .observations(yvec())
            .parameters(params)
            .build(),
        Err(FitProblemBuilderError::NoVariedParameters)
    );
}

#[test]
fn builder_fails_if_model_is_not_finite_at_initial_guess() {
    let model = Model::new(&["tau"], |x: f64, tau: f64| (-x / tau).exp()).unwrap();
    let params = model.make_params([("tau", 0.)]).unwrap();
    assert_matches!(
        FitProblemBuilder::new(model)
            .independent_variable(tvec())
            .observations(yvec())
            .parameters(params)
            .build(),
        Err(FitProblemBuilderError::NonFiniteModelOutput)
    );
}
